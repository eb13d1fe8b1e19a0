//! Sunburst chart projection.
//!
//! # Responsibility
//! - Map label-parent node lists into chart-ready arc segments with
//!   resolved values and colors.
//! - Expose the group-by-sum aggregate backing textual quick insights.
//!
//! # Invariants
//! - `BranchValues` is always an explicit parameter, never inferred.
//! - Dangling parents, cycles and multiple roots are accepted; the render is
//!   attempted with raw declared values.
//! - In `Total` mode, children declaring more than their parent's total are
//!   reported, not rebalanced.

use crate::model::node::Node;
use log::warn;
use serde::Serialize;
use std::collections::HashMap;

/// Aggregation convention for arc sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchValues {
    /// A node's value is its own slice; parents are pre-sized to accommodate
    /// children. Used for the hand-balanced fixed ESG dataset.
    Remainder,
    /// A node's value already includes all descendants' contributions. Used
    /// for the user-built tree.
    Total,
}

/// Label-to-color assignment with a fallback for unmapped labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorMap {
    colors: HashMap<String, String>,
    fallback: String,
}

impl ColorMap {
    /// Creates an empty map with the given fallback color.
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            colors: HashMap::new(),
            fallback: fallback.into(),
        }
    }

    /// Creates a map from `(label, color)` pairs with the given fallback.
    pub fn from_pairs<I, L, C>(pairs: I, fallback: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = (L, C)>,
        L: Into<String>,
        C: Into<String>,
    {
        Self {
            colors: pairs
                .into_iter()
                .map(|(label, color)| (label.into(), color.into()))
                .collect(),
            fallback: fallback.into(),
        }
    }

    /// Assigns one label a color, replacing any previous assignment.
    pub fn assign(&mut self, label: impl Into<String>, color: impl Into<String>) {
        self.colors.insert(label.into(), color.into());
    }

    /// Resolves the color for one label, falling back for unmapped labels.
    pub fn resolve(&self, label: &str) -> &str {
        self.colors
            .get(label)
            .map(String::as_str)
            .unwrap_or(self.fallback.as_str())
    }
}

/// One chart-ready arc of a sunburst.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArcSegment {
    /// Node label shown on the arc.
    pub label: String,
    /// Parent label; empty string for root arcs.
    pub parent: String,
    /// Resolved arc weight.
    pub value: f64,
    /// Resolved hex color.
    pub color: String,
}

/// Chart-ready sunburst structure for the rendering surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SunburstChart {
    /// Aggregation convention the renderer must apply.
    pub branch_values: BranchValues,
    /// Arc segments in input order.
    pub segments: Vec<ArcSegment>,
    /// Labels whose children declared more value than the node's own total.
    /// Populated in `Total` mode only; the render is still attempted with the
    /// raw declared values.
    pub overcommitted: Vec<String>,
}

impl SunburstChart {
    /// Sums `value` over all segments whose parent equals `category`.
    ///
    /// O(n) group-by-sum used for the textual quick-insights summary.
    pub fn category_total(&self, category: &str) -> f64 {
        self.segments
            .iter()
            .filter(|segment| segment.parent == category)
            .map(|segment| segment.value)
            .sum()
    }

    /// Returns whether the chart has no arcs.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Projects a flat node list into a sunburst chart.
///
/// Every node becomes one arc with its declared value and resolved color.
/// In `Total` mode, parents whose declared total is exceeded by the sum of
/// their direct children are recorded in `overcommitted` and logged; the
/// values themselves are left untouched.
pub fn project_sunburst(nodes: &[Node], colors: &ColorMap, mode: BranchValues) -> SunburstChart {
    let segments: Vec<ArcSegment> = nodes
        .iter()
        .map(|node| ArcSegment {
            label: node.label.clone(),
            parent: node.parent.clone(),
            value: node.value,
            color: colors.resolve(&node.label).to_string(),
        })
        .collect();

    let overcommitted = match mode {
        BranchValues::Remainder => Vec::new(),
        BranchValues::Total => overcommitted_labels(nodes),
    };
    for label in &overcommitted {
        warn!(
            "event=branch_overcommit module=chart status=warn label={label} \
             detail=children_declare_more_than_parent_total"
        );
    }

    SunburstChart {
        branch_values: mode,
        segments,
        overcommitted,
    }
}

/// Sums `value` over all nodes whose parent equals `category`.
pub fn category_total(nodes: &[Node], category: &str) -> f64 {
    nodes
        .iter()
        .filter(|node| node.parent == category)
        .map(|node| node.value)
        .sum()
}

fn overcommitted_labels(nodes: &[Node]) -> Vec<String> {
    let mut child_sums: HashMap<&str, f64> = HashMap::new();
    for node in nodes.iter().filter(|node| !node.is_root()) {
        *child_sums.entry(node.parent.as_str()).or_insert(0.0) += node.value;
    }

    // Tolerance absorbs float accumulation noise, not real overcommits.
    nodes
        .iter()
        .filter(|node| {
            child_sums
                .get(node.label.as_str())
                .is_some_and(|sum| *sum > node.value + f64::EPSILON * node.value.abs().max(1.0))
        })
        .map(|node| node.label.clone())
        .collect()
}
