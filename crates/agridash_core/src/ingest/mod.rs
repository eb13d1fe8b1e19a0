//! Uploaded-table ingestion boundary.
//!
//! # Responsibility
//! - Sniff upload formats by file extension only.
//! - Convert every accepted source into the one normalized `Node` sequence
//!   through an explicit adapter per format.
//!
//! # Invariants
//! - Unsupported extensions fail with `UnsupportedFormat` before any read.
//! - Adapters converge on `Vec<Node>`; nothing downstream knows the source.
//! - No content validation beyond what decoding itself requires.

mod csv_file;
mod spreadsheet;

use crate::model::node::Node;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

pub use csv_file::read_csv_nodes;
pub use spreadsheet::read_spreadsheet_nodes;

/// Result type used by ingestion operations.
pub type IngestResult<T> = Result<T, IngestError>;

/// Recognized upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadFormat {
    /// Comma-separated values (`.csv`).
    Csv,
    /// Excel spreadsheet (`.xlsx` / `.xls`).
    Spreadsheet,
}

/// Errors from upload ingestion.
#[derive(Debug)]
pub enum IngestError {
    /// File extension is not a recognized upload format.
    UnsupportedFormat { file_name: String },
    /// CSV decoding failure (I/O included).
    Csv(csv::Error),
    /// Spreadsheet decoding failure (I/O included).
    Spreadsheet(calamine::Error),
    /// A decoded row cannot be converted into a node.
    MalformedRow { row: usize, message: String },
    /// Workbook contains no readable worksheet.
    EmptyWorkbook,
}

impl Display for IngestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedFormat { file_name } => write!(
                f,
                "unsupported upload format for `{file_name}`; expected .csv, .xlsx or .xls"
            ),
            Self::Csv(err) => write!(f, "{err}"),
            Self::Spreadsheet(err) => write!(f, "{err}"),
            Self::MalformedRow { row, message } => {
                write!(f, "malformed upload row {row}: {message}")
            }
            Self::EmptyWorkbook => write!(f, "spreadsheet contains no readable worksheet"),
        }
    }
}

impl Error for IngestError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Csv(err) => Some(err),
            Self::Spreadsheet(err) => Some(err),
            Self::UnsupportedFormat { .. } | Self::MalformedRow { .. } | Self::EmptyWorkbook => {
                None
            }
        }
    }
}

impl From<csv::Error> for IngestError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

impl From<calamine::Error> for IngestError {
    fn from(value: calamine::Error) -> Self {
        Self::Spreadsheet(value)
    }
}

/// Sniffs the upload format from a file name extension.
///
/// This is the only validation performed before decoding: `.csv` and
/// `.xlsx`/`.xls` are accepted, anything else is `UnsupportedFormat`.
pub fn detect_format(file_name: &str) -> IngestResult<UploadFormat> {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("csv") => Ok(UploadFormat::Csv),
        Some("xlsx") | Some("xls") => Ok(UploadFormat::Spreadsheet),
        _ => Err(IngestError::UnsupportedFormat {
            file_name: file_name.to_string(),
        }),
    }
}

/// Loads nodes from an uploaded file, dispatching on the sniffed format.
pub fn load_nodes(path: &Path) -> IngestResult<Vec<Node>> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();
    match detect_format(file_name)? {
        UploadFormat::Csv => read_csv_nodes(path),
        UploadFormat::Spreadsheet => read_spreadsheet_nodes(path),
    }
}
