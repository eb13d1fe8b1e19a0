//! Embedded fixed datasets.
//!
//! # Responsibility
//! - Provide the literal, versionless ESG hierarchy and sector-performance
//!   constants consumed read-only by the dashboard core.
//!
//! # Invariants
//! - Dataset accessors are pure and deterministic.
//! - The ESG hierarchy is hand-balanced for `Remainder` aggregation; nothing
//!   re-derives its values.

pub mod esg;
pub mod sector;
