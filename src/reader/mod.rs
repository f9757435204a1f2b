//! Workbook loading into Arrow record batches
//!
//! The reader owns the only input I/O of the pipeline: it pulls one named
//! worksheet out of an `.xlsx`/`.xls` workbook and renders it as a record
//! batch of nullable Utf8 columns, the interchange format the rest of the
//! crate consumes. Everything is read as text; amount parsing happens later
//! in the ledger deserializers.

use calamine::{Data, Reader, open_workbook_auto};
use log::{debug, warn};
use std::path::Path;

use arrow::record_batch::RecordBatch;

use crate::error::{Error, Result};
use crate::utils::string_batch;

/// Load a named worksheet into a record batch of nullable Utf8 columns.
///
/// The first row is the header row; header names are trimmed and upper-cased
/// so later column matching is case/whitespace-insensitive. Empty cells
/// become nulls.
pub fn load_sheet(path: &Path, sheet_name: &str) -> Result<RecordBatch> {
    let mut workbook = open_workbook_auto(path)?;

    if !workbook.sheet_names().iter().any(|s| s == sheet_name) {
        return Err(Error::SheetNotFound {
            name: sheet_name.to_string(),
        });
    }
    let range = workbook.worksheet_range(sheet_name)?;

    let mut rows = range.rows();
    let header_row = rows.next().ok_or_else(|| Error::EmptySheet {
        name: sheet_name.to_string(),
    })?;

    let headers: Vec<String> = header_row
        .iter()
        .enumerate()
        .map(|(i, cell)| match cell_to_string(cell) {
            Some(name) => name.trim().to_uppercase(),
            None => format!("COLUMN {i}"),
        })
        .collect();

    let mut columns: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
    for row in rows {
        for (i, column) in columns.iter_mut().enumerate() {
            column.push(row.get(i).and_then(cell_to_string));
        }
    }

    let batch = string_batch(headers.into_iter().zip(columns).collect())?;
    debug!(
        "Loaded sheet '{}': {} rows, {} columns",
        sheet_name,
        batch.num_rows(),
        batch.num_columns()
    );
    Ok(batch)
}

/// Render a cell as text, `None` for empty cells
fn cell_to_string(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) => {
            if s.is_empty() {
                None
            } else {
                Some(s.clone())
            }
        }
        Data::Float(f) => Some(render_number(*f)),
        Data::Int(i) => Some(i.to_string()),
        Data::Bool(b) => Some(b.to_string()),
        Data::DateTime(dt) => Some(render_number(dt.as_f64())),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(s.clone()),
        Data::Error(e) => {
            warn!("Treating cell error {e:?} as empty");
            None
        }
    }
}

/// Render a numeric cell without a trailing `.0` for whole values
fn render_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
