//! Hierarchy node model.
//!
//! # Responsibility
//! - Define the single normalized record every data source converges on.
//! - Provide validation for user-entered node fields.
//!
//! # Invariants
//! - `label` must not be blank after trimming.
//! - `parent == ""` marks a root node.
//! - `value` is a non-negative weight used for arc sizing.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One labeled node of a hierarchy.
///
/// The `parent` field holds the label of another node in the same set, or the
/// empty string for a root. Dangling parents are tolerated on purpose so a
/// user can build a tree incrementally; well-formedness is a rendering
/// concern, not a storage one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Display label and join key within one tree.
    #[serde(alias = "labels")]
    pub label: String,
    /// Label of the parent node. Empty string means "is a root".
    #[serde(alias = "parents", default)]
    pub parent: String,
    /// Non-negative weight sizing this node's chart segment.
    #[serde(alias = "values", default)]
    pub value: f64,
}

/// Validation failures for user-entered node fields.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeValidationError {
    /// Label is empty or whitespace-only.
    BlankLabel,
    /// Value is negative.
    NegativeValue { value: f64 },
}

impl Display for NodeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankLabel => write!(f, "node label must not be blank"),
            Self::NegativeValue { value } => {
                write!(f, "node value must be non-negative, got {value}")
            }
        }
    }
}

impl Error for NodeValidationError {}

impl Node {
    /// Creates a node after trimming and validating its fields.
    ///
    /// # Errors
    /// - `BlankLabel` when the label trims to empty.
    /// - `NegativeValue` when `value < 0`.
    pub fn new(
        label: impl Into<String>,
        parent: impl Into<String>,
        value: f64,
    ) -> Result<Self, NodeValidationError> {
        let label = label.into().trim().to_string();
        if label.is_empty() {
            return Err(NodeValidationError::BlankLabel);
        }
        if value < 0.0 {
            return Err(NodeValidationError::NegativeValue { value });
        }
        Ok(Self {
            label,
            parent: parent.into().trim().to_string(),
            value,
        })
    }

    /// Returns whether this node is a root (empty parent label).
    pub fn is_root(&self) -> bool {
        self.parent.is_empty()
    }
}
