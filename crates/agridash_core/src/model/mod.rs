//! Domain model for hierarchical dashboard data.
//!
//! # Responsibility
//! - Define the canonical node shape shared by the fixed ESG dataset, the
//!   user-built tree and uploaded tables.
//!
//! # Invariants
//! - Generations are joined by label, never by numeric identity.
//! - A node with an empty parent label is a root.

pub mod node;
