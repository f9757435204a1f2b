//! Category enumerations for revenue classification
//!
//! This module defines the fixed category sets rows are reduced into: the
//! top-level billing track, the canonical clinical departments and the
//! outpatient revenue categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level billing track of a transaction row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RevenueClass {
    /// Inpatient revenue
    Inpatient,
    /// Outpatient revenue
    Outpatient,
}

impl RevenueClass {
    /// Derive the class from a patient/visit identifier.
    ///
    /// The identifier is trimmed and checked for the literal prefix "IP"
    /// (case-sensitive). No other signal is consulted.
    #[must_use]
    pub fn from_identifier(identifier: &str) -> Self {
        if identifier.trim().starts_with("IP") {
            Self::Inpatient
        } else {
            Self::Outpatient
        }
    }

    /// Get the display name for this class
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Inpatient => "IP Revenue",
            Self::Outpatient => "OP Revenue",
        }
    }
}

impl fmt::Display for RevenueClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Canonical clinical departments for inpatient grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    Cardiology,
    GeneralMedicine,
    Orthopedics,
    GeneralSurgery,
    Paediatrics,
    Gynecology,
    Urology,
    /// Default when no substring rule matches
    Others,
}

impl Department {
    /// Get the display name for this department
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Cardiology => "Cardiology",
            Self::GeneralMedicine => "General Medicine",
            Self::Orthopedics => "Orthopedics",
            Self::GeneralSurgery => "General Surgery",
            Self::Paediatrics => "Paediatrics",
            Self::Gynecology => "Gynecology",
            Self::Urology => "Urology",
            Self::Others => "Others",
        }
    }

    /// All departments in declaration order
    #[must_use]
    pub const fn all() -> [Self; 8] {
        [
            Self::Cardiology,
            Self::GeneralMedicine,
            Self::Orthopedics,
            Self::GeneralSurgery,
            Self::Paediatrics,
            Self::Gynecology,
            Self::Urology,
            Self::Others,
        ]
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Outpatient revenue categories
///
/// The first eight variants form the fixed display order of the summary
/// table. `OtherOpRevenue` is the catch-all every outpatient row starts in;
/// it receives rows but is not displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpCategory {
    ConsultationProcedures,
    Cardiology,
    Radiology,
    HealthCheckup,
    NursingHomeVisit,
    OthersRevenue,
    Laboratory,
    OtherProcedureCharges,
    /// Catch-all for rows matched by no rule
    OtherOpRevenue,
}

impl OpCategory {
    /// Get the display name for this category
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::ConsultationProcedures => "OP Consultation & Procedures",
            Self::Cardiology => "OP Cardiology Procedures",
            Self::Radiology => "OP Radiology",
            Self::HealthCheckup => "OP Health Checkup Packages",
            Self::NursingHomeVisit => "OP Nursing Home Visit",
            Self::OthersRevenue => "OP Others Revenue",
            Self::Laboratory => "OP Laboratory Revenue",
            Self::OtherProcedureCharges => "Other Procedure & Charges",
            Self::OtherOpRevenue => "Other OP Revenue",
        }
    }

    /// Fixed display order of the reported categories
    #[must_use]
    pub const fn display_order() -> [Self; 8] {
        [
            Self::ConsultationProcedures,
            Self::Cardiology,
            Self::Radiology,
            Self::HealthCheckup,
            Self::NursingHomeVisit,
            Self::OthersRevenue,
            Self::Laboratory,
            Self::OtherProcedureCharges,
        ]
    }
}

impl fmt::Display for OpCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
