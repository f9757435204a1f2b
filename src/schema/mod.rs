//! Schema validation and column access for loaded ledger batches.

use arrow::array::{Array, StringArray};
use arrow::record_batch::RecordBatch;

use crate::error::{Error, Result};

/// Ensure every required column exists in the batch.
///
/// Fails on the first missing column; a missing column is a structural error
/// and aborts the whole run, never a per-row condition.
pub fn require_columns(batch: &RecordBatch, required: &[&str]) -> Result<()> {
    for name in required {
        if batch.schema().index_of(name).is_err() {
            return Err(Error::Schema {
                column: (*name).to_string(),
            });
        }
    }
    Ok(())
}

/// Get a required column as a `StringArray`
pub fn string_column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a StringArray> {
    let column = batch.column_by_name(name).ok_or_else(|| Error::Schema {
        column: name.to_string(),
    })?;
    column
        .as_any()
        .downcast_ref::<StringArray>()
        .ok_or_else(|| Error::ColumnType {
            column: name.to_string(),
        })
}

/// Value of a string array at a row, `None` for nulls
#[must_use]
pub fn value_at<'a>(array: &'a StringArray, row: usize) -> Option<&'a str> {
    if array.is_null(row) {
        None
    } else {
        Some(array.value(row))
    }
}
