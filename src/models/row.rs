//! Typed ledger rows deserialized from the loaded batches.

use super::category::RevenueClass;

/// One billable line item of the revenue ledger
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    /// Billed amount after adjustments, parsed from accounting-formatted text
    pub net_amount: f64,
    /// Patient/visit identifier; its prefix determines the revenue class
    pub ip_number: String,
    /// Free-text clinical department, absent for most outpatient rows
    pub admitting_department: Option<String>,
    /// Billing category label on the line
    pub header: String,
    /// Free-text service name
    pub service_name: String,
    /// Top-level billing track derived from the identifier
    pub class: RevenueClass,
}

/// One pharmacy sale line
#[derive(Debug, Clone, PartialEq)]
pub struct PharmacyRow {
    /// Sale total; `None` when the cell held non-numeric text, in which case
    /// the row contributes nothing to channel sums
    pub total: Option<f64>,
    /// Registration/IP number; an "IPIP" substring marks an inpatient-linked sale
    pub reg_number: String,
    /// Sales channel label as entered on the line
    pub remarks: String,
}
