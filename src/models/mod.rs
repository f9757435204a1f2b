//! Typed domain models for ledger rows, categories and summary tables.

pub mod category;
pub mod row;
pub mod summary;

pub use category::{Department, OpCategory, RevenueClass};
pub use row::{PharmacyRow, TransactionRow};
pub use summary::{
    IpSummary, IpSummaryRow, OpSummary, OpSummaryRow, PharmacySummary, PharmacySummaryRow,
    RevenueReport,
};
