//! CSV upload adapter.
//!
//! # Responsibility
//! - Decode a `labels,parents,values` CSV table into the normalized node
//!   sequence.
//!
//! # Invariants
//! - The header row drives field mapping; both the external column names and
//!   the native `label,parent,value` names are accepted.
//! - Rows are returned in file order.

use crate::ingest::IngestResult;
use crate::model::node::Node;
use std::path::Path;

/// Reads all nodes from one CSV file.
///
/// # Errors
/// - `Csv` for I/O and decoding failures, including missing columns.
pub fn read_csv_nodes(path: &Path) -> IngestResult<Vec<Node>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut nodes = Vec::new();
    for record in reader.deserialize::<Node>() {
        nodes.push(record?);
    }
    Ok(nodes)
}
