//! Core domain logic for the Agridash ESG & sector-performance dashboard.
//! This crate is the single source of truth for business invariants; the
//! rendering surface consumes its snapshots and never mutates state itself.

pub mod chart;
pub mod dataset;
pub mod filter;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use chart::sunburst::{
    category_total, project_sunburst, ArcSegment, BranchValues, ColorMap, SunburstChart,
};
pub use filter::SubsetFilter;
pub use ingest::{detect_format, load_nodes, IngestError, IngestResult, UploadFormat};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::node::{Node, NodeValidationError};
pub use service::session::{CategoryInsight, DashboardSession, SessionError};
pub use store::tree_store::{InMemoryTreeStore, TreeStore, TreeStoreError, TreeStoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
