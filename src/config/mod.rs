//! Rule configuration for the classification engine
//!
//! Required columns, the department substring table, the outpatient
//! assignment rules and the pharmacy channel table are all data rather than
//! code, so rule sets can be versioned and tested against golden tables.
//! `Default` carries the built-in rules; a JSON file can override any part.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::algorithm::predicate::Predicate;
use crate::error::Result;
use crate::models::{Department, OpCategory};

/// Column names required in the revenue ledger, after header normalization
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RevenueColumns {
    pub net_amount: String,
    pub ip_number: String,
    pub admitting_department: String,
    pub header: String,
    pub service_name: String,
}

impl RevenueColumns {
    /// All required revenue columns
    #[must_use]
    pub fn required(&self) -> [&str; 5] {
        [
            &self.net_amount,
            &self.ip_number,
            &self.admitting_department,
            &self.header,
            &self.service_name,
        ]
    }
}

impl Default for RevenueColumns {
    fn default() -> Self {
        // "ADMITING DEPARTMENT" is the spelling the source workbooks carry.
        Self {
            net_amount: "NET AMOUNT".to_string(),
            ip_number: "IP NUMBER".to_string(),
            admitting_department: "ADMITING DEPARTMENT".to_string(),
            header: "HEADER".to_string(),
            service_name: "SERVICE NAME".to_string(),
        }
    }
}

/// Column names required in the pharmacy ledger, after header normalization
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PharmacyColumns {
    pub total: String,
    pub reg_number: String,
    pub remarks: String,
}

impl PharmacyColumns {
    /// All required pharmacy columns
    #[must_use]
    pub fn required(&self) -> [&str; 3] {
        [&self.total, &self.reg_number, &self.remarks]
    }
}

impl Default for PharmacyColumns {
    fn default() -> Self {
        Self {
            total: "TOTAL".to_string(),
            reg_number: "REG / IP NO".to_string(),
            remarks: "REMARKS".to_string(),
        }
    }
}

/// One entry of the ordered department substring table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentRule {
    pub department: Department,
    /// A rule matches when any pattern is a substring of the normalized input
    pub patterns: Vec<String>,
}

/// One outpatient assignment rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpRule {
    pub category: OpCategory,
    pub predicate: Predicate,
}

/// The ordered outpatient rule set
///
/// The consultation and procedure predicates are kept separate from the rule
/// list because the displayed "OP Consultation & Procedures" amount is
/// recomputed from those two masks independently of assignment precedence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OpRuleSet {
    pub consultation: Predicate,
    pub procedure: Predicate,
    /// Applied in order after the combined consultation-or-procedure rule;
    /// later rules overwrite earlier assignments
    pub rules: Vec<OpRule>,
}

impl Default for OpRuleSet {
    fn default() -> Self {
        let header = |h: &str| Predicate::HeaderIs(h.to_string());
        Self {
            consultation: Predicate::AllOf(vec![
                header("CONSULTATION CHARGES"),
                Predicate::HasDepartment,
            ]),
            procedure: Predicate::AllOf(vec![
                header("PROCEDURE"),
                Predicate::HasDepartment,
                Predicate::AnyOf(vec![
                    Predicate::ServiceContains("ORTHO PROCEDURE".to_string()),
                    Predicate::ServiceContains("OP - PROCEDURE".to_string()),
                ]),
            ]),
            rules: vec![
                OpRule {
                    category: OpCategory::Cardiology,
                    predicate: header("CARDIOLOGY"),
                },
                OpRule {
                    category: OpCategory::Radiology,
                    predicate: header("RADIOLOGY"),
                },
                OpRule {
                    category: OpCategory::OtherProcedureCharges,
                    predicate: Predicate::HeaderIn(vec![
                        "PHYSIOTHERAPY".to_string(),
                        "CONSULTATION CHARGES".to_string(),
                        "AMBULANCE SERVICE".to_string(),
                        "EQUIPMENT".to_string(),
                    ]),
                },
                OpRule {
                    category: OpCategory::OthersRevenue,
                    predicate: Predicate::AnyOf(vec![
                        header("PHYSIOTHERAPY"),
                        Predicate::AllOf(vec![
                            header("CONSULTATION CHARGES"),
                            Predicate::ServiceContains("PRIYA DHARSHINI D".to_string()),
                        ]),
                        header("AMBULANCE SERVICE"),
                        header("EQUIPMENT"),
                    ]),
                },
                OpRule {
                    category: OpCategory::HealthCheckup,
                    predicate: header("MHC PACKAGE"),
                },
                OpRule {
                    category: OpCategory::NursingHomeVisit,
                    predicate: Predicate::AnyOf(vec![
                        Predicate::AllOf(vec![
                            header("INVESTIGATION VISIT"),
                            Predicate::ServiceIs("NURSE HOME VISIT".to_string()),
                        ]),
                        header("NURSING HOME VISIT CHARGE"),
                        Predicate::AllOf(vec![
                            header("HOSPITAL CHARGES"),
                            Predicate::ServiceIs("SPECIAL NURSE CARE".to_string()),
                        ]),
                    ]),
                },
                // Applied last: wins every overlap, including rows that
                // already matched consultation or procedure.
                OpRule {
                    category: OpCategory::Laboratory,
                    predicate: Predicate::AnyOf(vec![
                        Predicate::HeaderIn(vec![
                            "LABORATORY".to_string(),
                            "PACKAGE".to_string(),
                            "HAEMATOLOGY".to_string(),
                        ]),
                        header("INVESTIGATION VISIT"),
                    ]),
                },
            ],
        }
    }
}

/// One pharmacy sales channel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelRule {
    /// Channel name; a row belongs to the channel only when its trimmed
    /// remarks equal this label exactly
    pub label: String,
    /// Whether the registration number must carry the inpatient marker
    /// (true) or must not (false)
    pub requires_ip_marker: bool,
}

/// Full rule configuration for one reduction run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    pub revenue_columns: RevenueColumns,
    pub pharmacy_columns: PharmacyColumns,
    /// Ordered department substring table; first matching entry wins
    pub departments: Vec<DepartmentRule>,
    pub outpatient: OpRuleSet,
    /// Ordered pharmacy channel table
    pub pharmacy_channels: Vec<ChannelRule>,
    /// Count the inpatient grand-total unique patients globally instead of
    /// summing the per-department counts (which double-count patients
    /// admitted under multiple departments)
    pub global_unique_patient_total: bool,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            revenue_columns: RevenueColumns::default(),
            pharmacy_columns: PharmacyColumns::default(),
            departments: default_departments(),
            outpatient: OpRuleSet::default(),
            pharmacy_channels: default_channels(),
            global_unique_patient_total: false,
        }
    }
}

impl RuleConfig {
    /// Load a configuration from a JSON file; missing fields keep their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

fn default_departments() -> Vec<DepartmentRule> {
    let rule = |department, patterns: &[&str]| DepartmentRule {
        department,
        patterns: patterns.iter().map(|p| (*p).to_string()).collect(),
    };
    vec![
        rule(
            Department::Cardiology,
            &[
                "INTERVENTIONAL CARDIOLOGIST",
                "CARDIOLOGY",
                "CARDIOTHORACIC SURGEON",
            ],
        ),
        rule(
            Department::GeneralMedicine,
            &[
                // Double space as in the source data.
                "ACCIDENT  CRITICAL AND EMERGENCY CARE PHYSICIAN",
                "INTERNAL MEDICINE",
                "GENERAL MEDICINE",
            ],
        ),
        rule(Department::Orthopedics, &["ORTHOPAEDICS"]),
        rule(Department::GeneralSurgery, &["GENERAL SURGEON"]),
        rule(Department::Paediatrics, &["PAEDIATRICS"]),
        rule(
            Department::Gynecology,
            &["GYNECOLOGY", "OBSTETRICS & GYNAECOLOGY"],
        ),
        rule(Department::Urology, &["UROLOGY"]),
    ]
}

fn default_channels() -> Vec<ChannelRule> {
    let channel = |label: &str, requires_ip_marker| ChannelRule {
        label: label.to_string(),
        requires_ip_marker,
    };
    vec![
        channel("Home Visit Sales", false),
        channel("IP Discharge patient Revisit Sales", false),
        channel("ER Pharmacy Sales", false),
        channel("OTC/Outside Doctors Prescriptions", false),
        channel("OP Sales", false),
        channel("IP Pharmacy Sales", true),
    ]
}
