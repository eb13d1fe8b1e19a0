//! Fixed ESG hierarchy, palette and narrative notes.
//!
//! # Responsibility
//! - Define the built-in 15-node ESG composition dataset for Vietnam
//!   agriculture, its per-label palette and the category one-liners.
//!
//! # Invariants
//! - Exactly one root (`ESG`) with three category branches.
//! - Labels here are the fixed enumeration the filter multiselect offers.

use crate::chart::sunburst::ColorMap;
use crate::model::node::Node;

/// Root label of the fixed ESG hierarchy.
pub const ROOT_LABEL: &str = "ESG";

/// Top-level categories offered by the filter control.
pub const CATEGORIES: [&str; 3] = ["Governance", "Social", "Environment"];

/// Default color for labels without a palette entry.
pub const FALLBACK_COLOR: &str = "#CCCCCC";

const ESG_TABLE: [(&str, &str, f64); 15] = [
    ("ESG", "", 200.0),
    ("Governance", "ESG", 3800.0),
    ("Social", "ESG", 3800.0),
    ("Environment", "ESG", 3800.0),
    ("Food Security", "Governance", 28000.0),
    ("Government Regulations", "Governance", 28000.0),
    ("PPP", "Governance", 28000.0),
    ("Private Investment", "Governance", 28000.0),
    ("High-skilled Labour", "Social", 37000.0),
    ("Community Impact", "Social", 37000.0),
    ("Health & Safety", "Social", 37000.0),
    ("Resource & Land Use", "Environment", 28000.0),
    ("Carbon Credit", "Environment", 28000.0),
    ("Eco-farming", "Environment", 28000.0),
    ("High-tech Cultivation", "Environment", 28000.0),
];

const ESG_PALETTE: [(&str, &str); 15] = [
    // Light brown root, soft yellow Governance, soft orange Social,
    // soft green Environment; leaves share a pale tint per branch.
    ("ESG", "#D4B483"),
    ("Governance", "#FFC107"),
    ("Social", "#FFA384"),
    ("Environment", "#8FB98F"),
    ("Food Security", "#FFE29A"),
    ("Government Regulations", "#FFE29A"),
    ("PPP", "#FFE29A"),
    ("Private Investment", "#FFE29A"),
    ("High-skilled Labour", "#FFC8B2"),
    ("Community Impact", "#FFC8B2"),
    ("Health & Safety", "#FFC8B2"),
    ("Resource & Land Use", "#A7DCA7"),
    ("Carbon Credit", "#A7DCA7"),
    ("Eco-farming", "#A7DCA7"),
    ("High-tech Cultivation", "#A7DCA7"),
];

/// Returns the built-in 15-node ESG hierarchy in display order.
pub fn esg_hierarchy() -> Vec<Node> {
    ESG_TABLE
        .iter()
        .map(|(label, parent, value)| Node {
            label: (*label).to_string(),
            parent: (*parent).to_string(),
            value: *value,
        })
        .collect()
}

/// Returns the per-label ESG palette with the neutral fallback.
pub fn esg_colors() -> ColorMap {
    ColorMap::from_pairs(ESG_PALETTE, FALLBACK_COLOR)
}

/// Returns the narrative one-liner for a top-level category.
pub fn category_note(label: &str) -> Option<&'static str> {
    match label {
        "Governance" => Some(
            "Focuses on transparency, policy compliance, and public-private partnerships.",
        ),
        "Social" => Some(
            "Includes community impact, worker conditions, and health & safety measures.",
        ),
        "Environment" => Some(
            "Relates to resource management, carbon credit, and sustainable farming practices.",
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{category_note, esg_colors, esg_hierarchy, CATEGORIES, ROOT_LABEL};

    #[test]
    fn hierarchy_has_one_root_and_three_branches() {
        let nodes = esg_hierarchy();
        assert_eq!(nodes.len(), 15);
        let roots: Vec<_> = nodes.iter().filter(|node| node.is_root()).collect();
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].label, ROOT_LABEL);
        for category in CATEGORIES {
            assert!(nodes
                .iter()
                .any(|node| node.label == category && node.parent == ROOT_LABEL));
        }
    }

    #[test]
    fn every_label_has_a_palette_entry() {
        let colors = esg_colors();
        for node in esg_hierarchy() {
            assert_ne!(colors.resolve(&node.label), super::FALLBACK_COLOR);
        }
    }

    #[test]
    fn notes_exist_for_categories_only() {
        for category in CATEGORIES {
            assert!(category_note(category).is_some());
        }
        assert!(category_note(ROOT_LABEL).is_none());
        assert!(category_note("PPP").is_none());
    }
}
