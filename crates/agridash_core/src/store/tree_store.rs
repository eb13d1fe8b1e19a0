//! Tree store contract and in-memory implementation.
//!
//! # Responsibility
//! - Hold the ordered sequence of nodes a user builds up interactively.
//! - Provide strict LIFO undo over that sequence.
//!
//! # Invariants
//! - Insertion order is preserved; only the most recent node is removable.
//! - Failed operations leave the sequence unchanged.
//! - No deduplication, cycle detection or dangling-parent checks: a node may
//!   reference a parent added later, or never.

use crate::model::node::{Node, NodeValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type used by tree store operations.
pub type TreeStoreResult<T> = Result<T, TreeStoreError>;

/// Errors from tree store operations.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeStoreError {
    /// Appended node failed field validation.
    Invalid(NodeValidationError),
    /// Undo requested on an empty store.
    NothingToUndo,
}

impl Display for TreeStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(err) => write!(f, "{err}"),
            Self::NothingToUndo => write!(f, "nothing to undo"),
        }
    }
}

impl Error for TreeStoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(err) => Some(err),
            Self::NothingToUndo => None,
        }
    }
}

impl From<NodeValidationError> for TreeStoreError {
    fn from(value: NodeValidationError) -> Self {
        Self::Invalid(value)
    }
}

/// Ordered node-sequence contract for the builder session.
pub trait TreeStore {
    /// Validates and appends one node at the end of the sequence.
    ///
    /// Returns the stored node (with trimmed fields) on success.
    fn append(&mut self, label: &str, parent: &str, value: f64) -> TreeStoreResult<Node>;
    /// Removes and returns the last-appended node.
    ///
    /// # Errors
    /// - `NothingToUndo` when the sequence is empty; length stays 0.
    fn remove_last(&mut self) -> TreeStoreResult<Node>;
    /// Clears the sequence unconditionally.
    fn reset(&mut self);
    /// Returns a read-only ordered copy of the current sequence.
    fn snapshot(&self) -> Vec<Node>;
    /// Returns the current sequence length.
    fn len(&self) -> usize;
    /// Returns whether the sequence is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Session-scoped in-memory tree store.
///
/// The only mutable state that persists across interactions within one
/// session. Dropping it loses all builder progress; there is no durability.
#[derive(Debug, Default, Clone)]
pub struct InMemoryTreeStore {
    nodes: Vec<Node>,
}

impl InMemoryTreeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TreeStore for InMemoryTreeStore {
    fn append(&mut self, label: &str, parent: &str, value: f64) -> TreeStoreResult<Node> {
        let node = Node::new(label, parent, value)?;
        self.nodes.push(node.clone());
        Ok(node)
    }

    fn remove_last(&mut self) -> TreeStoreResult<Node> {
        self.nodes.pop().ok_or(TreeStoreError::NothingToUndo)
    }

    fn reset(&mut self) {
        self.nodes.clear();
    }

    fn snapshot(&self) -> Vec<Node> {
        self.nodes.clone()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}
