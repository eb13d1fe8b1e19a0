//! Store layer for the user-built hierarchy.
//!
//! # Responsibility
//! - Define the ordered node-sequence contract used by the builder session.
//! - Keep storage details behind a trait so the session stays
//!   implementation-agnostic.
//!
//! # Invariants
//! - Store writes must enforce `Node` validation before insertion.
//! - Store APIs return semantic errors (`NothingToUndo`) in addition to
//!   validation errors.

pub mod tree_store;
