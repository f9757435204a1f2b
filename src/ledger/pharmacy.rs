//! Pharmacy ledger deserialization
//!
//! Unlike the revenue ledger, a non-numeric pharmacy total does not reject
//! the run: it is coerced to missing and the row contributes nothing to any
//! channel sum.

use arrow::record_batch::RecordBatch;
use log::{debug, warn};

use crate::config::PharmacyColumns;
use crate::error::Result;
use crate::ledger::revenue::parse_amount;
use crate::models::PharmacyRow;
use crate::schema::{require_columns, string_column, value_at};

/// Deserialize a pharmacy batch into sale rows
pub fn deserialize_batch(batch: &RecordBatch, columns: &PharmacyColumns) -> Result<Vec<PharmacyRow>> {
    require_columns(batch, &columns.required())?;

    let totals = string_column(batch, &columns.total)?;
    let reg_numbers = string_column(batch, &columns.reg_number)?;
    let remarks = string_column(batch, &columns.remarks)?;

    let mut rows = Vec::with_capacity(batch.num_rows());
    for i in 0..batch.num_rows() {
        let total = match value_at(totals, i) {
            None => None,
            Some(raw) if raw.trim().is_empty() => None,
            Some(raw) => match parse_amount(Some(raw)) {
                Ok(v) => Some(v),
                Err(value) => {
                    warn!("Ignoring non-numeric pharmacy total '{value}' in row {i}");
                    None
                }
            },
        };
        rows.push(PharmacyRow {
            total,
            reg_number: value_at(reg_numbers, i).unwrap_or("").to_string(),
            remarks: value_at(remarks, i).unwrap_or("").to_string(),
        });
    }

    debug!("Deserialized {} pharmacy rows", rows.len());
    Ok(rows)
}
