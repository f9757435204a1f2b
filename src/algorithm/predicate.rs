//! Boolean rule predicates over transaction rows
//!
//! Outpatient classification rules are data, not code: each rule carries a
//! small predicate expression evaluated against a normalized view of the row.
//! All string comparisons happen after trimming and upper-casing both sides.

use serde::{Deserialize, Serialize};

use crate::models::TransactionRow;

/// Normalized view of a transaction row used for rule evaluation
#[derive(Debug, Clone)]
pub struct RuleInput {
    /// Trimmed, upper-cased billing header
    pub header: String,
    /// Trimmed, upper-cased service name
    pub service_name: String,
    /// Whether the admitting department is present
    pub has_department: bool,
}

impl RuleInput {
    /// Normalize a row once so rule evaluation does not re-allocate per predicate
    #[must_use]
    pub fn from_row(row: &TransactionRow) -> Self {
        Self {
            header: normalize(&row.header),
            service_name: normalize(&row.service_name),
            has_department: row.admitting_department.is_some(),
        }
    }
}

/// Trim and upper-case a value for comparison
#[must_use]
pub fn normalize(value: &str) -> String {
    value.trim().to_uppercase()
}

/// A predicate expression over (header, service name, admitting department)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Predicate {
    /// Header equals the given value
    HeaderIs(String),

    /// Header equals any of the given values
    HeaderIn(Vec<String>),

    /// Service name equals the given value
    ServiceIs(String),

    /// Service name contains the given substring
    ServiceContains(String),

    /// Admitting department is present
    HasDepartment,

    /// Logical AND of predicates
    AllOf(Vec<Predicate>),

    /// Logical OR of predicates
    AnyOf(Vec<Predicate>),
}

impl Predicate {
    /// Evaluate the predicate against a normalized row
    #[must_use]
    pub fn matches(&self, input: &RuleInput) -> bool {
        match self {
            Self::HeaderIs(value) => input.header == normalize(value),
            Self::HeaderIn(values) => values.iter().any(|v| input.header == normalize(v)),
            Self::ServiceIs(value) => input.service_name == normalize(value),
            Self::ServiceContains(value) => input.service_name.contains(&normalize(value)),
            Self::HasDepartment => input.has_department,
            Self::AllOf(predicates) => predicates.iter().all(|p| p.matches(input)),
            Self::AnyOf(predicates) => predicates.iter().any(|p| p.matches(input)),
        }
    }
}
