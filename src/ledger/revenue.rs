//! Revenue ledger deserialization — the row normalizer
//!
//! Parses accounting-formatted amounts and tags each row with its top-level
//! revenue class from the identifier prefix. A non-numeric amount rejects the
//! whole run: totals must never silently differ between runs over the same
//! input.

use arrow::record_batch::RecordBatch;
use log::debug;

use crate::config::RevenueColumns;
use crate::error::{Error, Result};
use crate::models::{RevenueClass, TransactionRow};
use crate::schema::{require_columns, string_column, value_at};

/// Deserialize a revenue batch into transaction rows
pub fn deserialize_batch(
    batch: &RecordBatch,
    columns: &RevenueColumns,
) -> Result<Vec<TransactionRow>> {
    require_columns(batch, &columns.required())?;

    let amounts = string_column(batch, &columns.net_amount)?;
    let identifiers = string_column(batch, &columns.ip_number)?;
    let departments = string_column(batch, &columns.admitting_department)?;
    let headers = string_column(batch, &columns.header)?;
    let services = string_column(batch, &columns.service_name)?;

    let mut rows = Vec::with_capacity(batch.num_rows());
    for i in 0..batch.num_rows() {
        let net_amount =
            parse_amount(value_at(amounts, i)).map_err(|value| Error::AmountParse {
                column: columns.net_amount.clone(),
                row: i,
                value,
            })?;
        let ip_number = value_at(identifiers, i).unwrap_or("").to_string();
        let class = RevenueClass::from_identifier(&ip_number);
        rows.push(TransactionRow {
            net_amount,
            ip_number,
            admitting_department: value_at(departments, i).map(str::to_string),
            header: value_at(headers, i).unwrap_or("").to_string(),
            service_name: value_at(services, i).unwrap_or("").to_string(),
            class,
        });
    }

    debug!("Deserialized {} revenue rows", rows.len());
    Ok(rows)
}

/// Parse an accounting-formatted amount string.
///
/// Missing or blank values are zero. Thousands separators and surrounding
/// whitespace are stripped; a value wrapped in parentheses is read as a
/// negative number. Returns the offending value on non-numeric residue.
pub fn parse_amount(raw: Option<&str>) -> std::result::Result<f64, String> {
    let Some(raw) = raw else { return Ok(0.0) };
    let cleaned = raw.replace(',', "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return Ok(0.0);
    }
    if cleaned.starts_with('(') && cleaned.ends_with(')') {
        let inner = cleaned.trim_matches(|c| c == '(' || c == ')').trim();
        return inner
            .parse::<f64>()
            .map(|v| -v)
            .map_err(|_| raw.to_string());
    }
    cleaned.parse::<f64>().map_err(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::parse_amount;

    #[test]
    fn test_plain_amounts() {
        assert_eq!(parse_amount(Some("1234.50")), Ok(1234.50));
        assert_eq!(parse_amount(Some(" 1,234.50 ")), Ok(1234.50));
        assert_eq!(parse_amount(Some("1,00,000")), Ok(100_000.0));
    }

    #[test]
    fn test_accounting_negatives() {
        assert_eq!(parse_amount(Some("(500)")), Ok(-500.0));
        assert_eq!(parse_amount(Some("(1,250.75)")), Ok(-1250.75));
    }

    #[test]
    fn test_blank_is_zero() {
        assert_eq!(parse_amount(None), Ok(0.0));
        assert_eq!(parse_amount(Some("")), Ok(0.0));
        assert_eq!(parse_amount(Some("   ")), Ok(0.0));
    }

    #[test]
    fn test_non_numeric_residue() {
        assert_eq!(parse_amount(Some("N/A")), Err("N/A".to_string()));
        assert_eq!(parse_amount(Some("(abc)")), Err("(abc)".to_string()));
    }
}
