//! Shared helpers for building string batches, used by the reader and tests.

use arrow::array::{ArrayRef, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use std::sync::Arc;

use crate::error::Result;

/// Build a record batch of nullable Utf8 columns from named column vectors
pub fn string_batch(columns: Vec<(String, Vec<Option<String>>)>) -> Result<RecordBatch> {
    let fields: Vec<Field> = columns
        .iter()
        .map(|(name, _)| Field::new(name, DataType::Utf8, true))
        .collect();
    let arrays: Vec<ArrayRef> = columns
        .into_iter()
        .map(|(_, values)| Arc::new(StringArray::from(values)) as ArrayRef)
        .collect();
    Ok(RecordBatch::try_new(Arc::new(Schema::new(fields)), arrays)?)
}

/// Convenience wrapper over [`string_batch`] taking string slices
pub fn string_batch_from_slices(columns: &[(&str, &[Option<&str>])]) -> Result<RecordBatch> {
    string_batch(
        columns
            .iter()
            .map(|(name, values)| {
                (
                    (*name).to_string(),
                    values.iter().map(|v| v.map(str::to_string)).collect(),
                )
            })
            .collect(),
    )
}
