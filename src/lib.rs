//! Reduces a hospital's transactional revenue ledger and pharmacy sales
//! ledger into three categorized summary tables: inpatient revenue by
//! department, outpatient revenue by service category and pharmacy revenue by
//! sales channel.
//!
//! The pipeline is load → validate → normalize → classify → aggregate →
//! emit: `reader` pulls worksheets into string record batches, `ledger`
//! deserializes them into typed rows, `algorithm` applies the configured rule
//! tables and `report` writes the summary workbook.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
pub mod reader;
pub mod report;
pub mod schema;
pub mod utils;

// Re-export the most common types for easier use
pub use algorithm::generate_report;
pub use config::RuleConfig;
pub use error::{Error, Result};
pub use models::{
    Department, IpSummary, OpCategory, OpSummary, PharmacySummary, RevenueClass, RevenueReport,
};

// Arrow types
pub use arrow::record_batch::RecordBatch;
