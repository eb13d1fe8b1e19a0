//! Category subset selection over a three-level hierarchy.
//!
//! # Responsibility
//! - Compute the visible node subset for a set of selected categories.
//!
//! # Invariants
//! - Membership is a one-hop test: root, selected label, or selected parent.
//! - Empty selection yields the root node(s) only, never an empty chart.
//! - Input order is preserved in the output.

use crate::model::node::Node;
use std::collections::BTreeSet;

/// Selected-category filter over a node list.
///
/// Selection is recomputed per interaction from user input and never
/// persisted. Labels that match no node are tolerated; selecting a category
/// with no children still includes the category node itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubsetFilter {
    selected: BTreeSet<String>,
}

impl SubsetFilter {
    /// Creates a filter from any iterable of category labels.
    pub fn new<I, S>(selected: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selected: selected.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns whether no category is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Returns the selected labels in sorted order.
    pub fn selected(&self) -> Vec<&str> {
        self.selected.iter().map(String::as_str).collect()
    }

    /// Returns whether one label is part of the selection.
    pub fn contains(&self, label: &str) -> bool {
        self.selected.contains(label)
    }

    /// Computes the visible subset of `nodes` for this selection.
    ///
    /// A node is included if it is a root, its label is selected, or its
    /// parent label is selected. With an empty selection only the root
    /// node(s) remain, signaling "nothing selected" instead of an empty
    /// chart.
    pub fn apply(&self, nodes: &[Node]) -> Vec<Node> {
        nodes
            .iter()
            .filter(|node| {
                node.is_root()
                    || self.selected.contains(&node.label)
                    || self.selected.contains(&node.parent)
            })
            .cloned()
            .collect()
    }
}
