//! Spreadsheet upload adapter.
//!
//! # Responsibility
//! - Decode the first worksheet of an Excel workbook into the normalized
//!   node sequence.
//!
//! # Invariants
//! - The header row drives column mapping; `labels`/`parents`/`values` and
//!   the native singular names are accepted, case-insensitively.
//! - Missing parent cells mean "is a root"; missing value cells mean 0.

use crate::ingest::{IngestError, IngestResult};
use crate::model::node::Node;
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// Reads all nodes from the first worksheet of one workbook.
///
/// # Errors
/// - `Spreadsheet` for I/O and workbook decoding failures.
/// - `EmptyWorkbook` when no worksheet exists.
/// - `MalformedRow` when the header misses a required column or a cell
///   cannot be converted.
pub fn read_spreadsheet_nodes(path: &Path) -> IngestResult<Vec<Node>> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(IngestError::EmptyWorkbook)??;

    let mut rows = range.rows();
    let header = rows.next().ok_or(IngestError::EmptyWorkbook)?;
    let columns = HeaderColumns::locate(header)?;

    let mut nodes = Vec::new();
    for (index, row) in rows.enumerate() {
        // Worksheet row numbers are 1-based and include the header.
        let row_number = index + 2;
        if row.iter().all(is_blank_cell) {
            continue;
        }
        nodes.push(columns.node_from_row(row, row_number)?);
    }
    Ok(nodes)
}

#[derive(Debug)]
struct HeaderColumns {
    label: usize,
    parent: usize,
    value: usize,
}

impl HeaderColumns {
    fn locate(header: &[Data]) -> IngestResult<Self> {
        let find = |names: [&str; 2]| {
            header.iter().position(|cell| match cell {
                Data::String(text) => {
                    let lowered = text.trim().to_ascii_lowercase();
                    names.contains(&lowered.as_str())
                }
                _ => false,
            })
        };

        let missing = |column: &str| IngestError::MalformedRow {
            row: 1,
            message: format!("header is missing a `{column}` column"),
        };

        Ok(Self {
            label: find(["labels", "label"]).ok_or_else(|| missing("labels"))?,
            parent: find(["parents", "parent"]).ok_or_else(|| missing("parents"))?,
            value: find(["values", "value"]).ok_or_else(|| missing("values"))?,
        })
    }

    fn node_from_row(&self, row: &[Data], row_number: usize) -> IngestResult<Node> {
        let label = text_cell(row, self.label, row_number, "labels")?;
        let parent = text_cell(row, self.parent, row_number, "parents")?;
        let value = numeric_cell(row, self.value, row_number, "values")?;
        Ok(Node {
            label,
            parent,
            value,
        })
    }
}

fn is_blank_cell(cell: &Data) -> bool {
    match cell {
        Data::Empty => true,
        Data::String(text) => text.trim().is_empty(),
        _ => false,
    }
}

fn text_cell(row: &[Data], index: usize, row_number: usize, column: &str) -> IngestResult<String> {
    match row.get(index) {
        None | Some(Data::Empty) => Ok(String::new()),
        Some(Data::String(text)) => Ok(text.trim().to_string()),
        Some(Data::Int(number)) => Ok(number.to_string()),
        Some(Data::Float(number)) => Ok(number.to_string()),
        Some(other) => Err(IngestError::MalformedRow {
            row: row_number,
            message: format!("cell `{column}` holds non-text data `{other:?}`"),
        }),
    }
}

fn numeric_cell(row: &[Data], index: usize, row_number: usize, column: &str) -> IngestResult<f64> {
    match row.get(index) {
        None | Some(Data::Empty) => Ok(0.0),
        Some(Data::Float(number)) => Ok(*number),
        Some(Data::Int(number)) => Ok(*number as f64),
        Some(Data::String(text)) => {
            text.trim()
                .parse::<f64>()
                .map_err(|err| IngestError::MalformedRow {
                    row: row_number,
                    message: format!("cell `{column}` is not numeric: {err}"),
                })
        }
        Some(other) => Err(IngestError::MalformedRow {
            row: row_number,
            message: format!("cell `{column}` holds non-numeric data `{other:?}`"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::{is_blank_cell, HeaderColumns};
    use crate::ingest::IngestError;
    use calamine::Data;

    fn header(names: [&str; 3]) -> Vec<Data> {
        names
            .iter()
            .map(|name| Data::String((*name).to_string()))
            .collect()
    }

    #[test]
    fn locate_accepts_external_and_native_header_names() {
        let columns = HeaderColumns::locate(&header(["labels", "parents", "values"])).unwrap();
        assert_eq!((columns.label, columns.parent, columns.value), (0, 1, 2));

        let columns = HeaderColumns::locate(&header([" Value ", "Label", "Parent"])).unwrap();
        assert_eq!((columns.label, columns.parent, columns.value), (1, 2, 0));
    }

    #[test]
    fn locate_reports_a_missing_values_column() {
        let err = HeaderColumns::locate(&header(["labels", "parents", "weights"])).unwrap_err();
        match err {
            IngestError::MalformedRow { row, message } => {
                assert_eq!(row, 1);
                assert!(message.contains("values"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn node_from_row_coerces_text_and_numeric_cells() {
        let columns = HeaderColumns::locate(&header(["labels", "parents", "values"])).unwrap();

        let row = [
            Data::String("Governance".to_string()),
            Data::String("ESG".to_string()),
            Data::Int(400),
        ];
        let node = columns.node_from_row(&row, 2).unwrap();
        assert_eq!(node.label, "Governance");
        assert_eq!(node.parent, "ESG");
        assert_eq!(node.value, 400.0);

        // Empty parent cell means root; numeric text still parses.
        let row = [
            Data::String("ESG".to_string()),
            Data::Empty,
            Data::String(" 200.5 ".to_string()),
        ];
        let node = columns.node_from_row(&row, 3).unwrap();
        assert!(node.is_root());
        assert_eq!(node.value, 200.5);
    }

    #[test]
    fn node_from_row_defaults_a_missing_value_cell_to_zero() {
        let columns = HeaderColumns::locate(&header(["labels", "parents", "values"])).unwrap();
        let row = [Data::String("ESG".to_string())];
        let node = columns.node_from_row(&row, 2).unwrap();
        assert_eq!(node.value, 0.0);
        assert!(node.is_root());
    }

    #[test]
    fn node_from_row_rejects_a_non_numeric_value_cell() {
        let columns = HeaderColumns::locate(&header(["labels", "parents", "values"])).unwrap();
        let row = [
            Data::String("ESG".to_string()),
            Data::Empty,
            Data::String("plenty".to_string()),
        ];
        let err = columns.node_from_row(&row, 4).unwrap_err();
        assert!(matches!(err, IngestError::MalformedRow { row: 4, .. }));
    }

    #[test]
    fn blank_cells_are_recognized_for_row_skipping() {
        assert!(is_blank_cell(&Data::Empty));
        assert!(is_blank_cell(&Data::String("  ".to_string())));
        assert!(!is_blank_cell(&Data::Int(0)));
        assert!(!is_blank_cell(&Data::String("ESG".to_string())));
    }
}
