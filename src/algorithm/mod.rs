//! Classification and aggregation algorithms
//!
//! The reduction is a pure function of the two loaded ledger batches and the
//! rule configuration; no state is held between invocations.

pub mod department;
pub mod inpatient;
pub mod outpatient;
pub mod pharmacy;
pub mod predicate;

use arrow::record_batch::RecordBatch;
use log::debug;

use crate::config::RuleConfig;
use crate::error::Result;
use crate::ledger;
use crate::models::RevenueReport;

/// Run the whole reduction over the two loaded ledgers.
///
/// Validates both schemas, deserializes both ledgers and produces the three
/// summary tables.
pub fn generate_report(
    revenue_batch: &RecordBatch,
    pharmacy_batch: &RecordBatch,
    config: &RuleConfig,
) -> Result<RevenueReport> {
    let transactions = ledger::revenue::deserialize_batch(revenue_batch, &config.revenue_columns)?;
    let sales = ledger::pharmacy::deserialize_batch(pharmacy_batch, &config.pharmacy_columns)?;
    debug!(
        "Reducing {} transaction rows and {} pharmacy rows",
        transactions.len(),
        sales.len()
    );

    Ok(RevenueReport {
        inpatient: inpatient::summarize(&transactions, config),
        outpatient: outpatient::summarize(&transactions, config),
        pharmacy: pharmacy::summarize(&sales, &config.pharmacy_channels),
    })
}
