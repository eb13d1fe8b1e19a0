//! Chart projection layer.
//!
//! # Responsibility
//! - Transform flat node lists into structures the rendering surface can
//!   draw directly.
//! - Keep aggregation semantics explicit instead of renderer-implicit.
//!
//! # Invariants
//! - Projections never fail on malformed trees; degenerate input renders
//!   degenerately.

pub mod sunburst;
