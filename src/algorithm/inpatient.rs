//! Inpatient revenue aggregation by canonical department.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::algorithm::department::map_department;
use crate::config::RuleConfig;
use crate::models::{Department, IpSummary, IpSummaryRow, RevenueClass, TransactionRow};

#[derive(Default)]
struct Group {
    patients: FxHashSet<String>,
    amount: f64,
}

/// Summarize inpatient rows: unique patients and amount per department,
/// grand-total row last.
///
/// The grand-total unique-patient count is by default the sum of the
/// per-department counts, which double-counts patients admitted under more
/// than one department; `config.global_unique_patient_total` switches it to
/// the true global distinct count.
#[must_use]
pub fn summarize(rows: &[TransactionRow], config: &RuleConfig) -> IpSummary {
    let mut groups: FxHashMap<Department, Group> = FxHashMap::default();
    let mut all_patients: FxHashSet<&str> = FxHashSet::default();

    for row in rows
        .iter()
        .filter(|r| r.class == RevenueClass::Inpatient)
    {
        let department = map_department(row.admitting_department.as_deref(), &config.departments);
        let group = groups.entry(department).or_default();
        group.patients.insert(row.ip_number.clone());
        group.amount += row.net_amount;
        all_patients.insert(&row.ip_number);
    }

    let mut summary_rows = Vec::with_capacity(groups.len() + 1);
    let mut patient_sum = 0;
    let mut amount_sum = 0.0;
    for department in Department::all() {
        let Some(group) = groups.get(&department) else {
            continue;
        };
        patient_sum += group.patients.len();
        amount_sum += group.amount;
        summary_rows.push(IpSummaryRow {
            department: department.display_name().to_string(),
            unique_patients: group.patients.len(),
            total_amount: group.amount,
        });
    }

    let total_patients = if config.global_unique_patient_total {
        all_patients.len()
    } else {
        patient_sum
    };
    summary_rows.push(IpSummaryRow {
        department: "Total".to_string(),
        unique_patients: total_patients,
        total_amount: amount_sum,
    });

    IpSummary { rows: summary_rows }
}
