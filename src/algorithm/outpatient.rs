//! Outpatient revenue classification and aggregation
//!
//! Assignment is a sequential overwrite over a mutable per-row category, not
//! first-match-wins: the rule predicates overlap, and which rule is applied
//! last decides the overlap. The laboratory rule runs last and therefore wins
//! every overlap. Do not reorder the rule list or short-circuit on the first
//! match; that changes output for overlapping rows.

use rustc_hash::FxHashMap;

use crate::algorithm::predicate::RuleInput;
use crate::config::RuleConfig;
use crate::models::{OpCategory, OpSummary, OpSummaryRow, RevenueClass, TransactionRow};

#[derive(Default)]
struct Bucket {
    visits: usize,
    amount: f64,
}

/// Summarize outpatient rows: visit count and amount per category, in the
/// fixed display order, categories without rows reported as zero.
///
/// The displayed "OP Consultation & Procedures" amount is recomputed from the
/// consultation and procedure masks evaluated independently of assignment
/// precedence; the visit count of that row is not. The asymmetry is kept
/// deliberately.
#[must_use]
pub fn summarize(rows: &[TransactionRow], config: &RuleConfig) -> OpSummary {
    let rule_set = &config.outpatient;
    let mut buckets: FxHashMap<OpCategory, Bucket> = FxHashMap::default();
    let mut consultation_amount = 0.0;
    let mut procedure_amount = 0.0;

    for row in rows
        .iter()
        .filter(|r| r.class == RevenueClass::Outpatient)
    {
        let input = RuleInput::from_row(row);

        let consultation = rule_set.consultation.matches(&input);
        let procedure = rule_set.procedure.matches(&input);
        if consultation {
            consultation_amount += row.net_amount;
        }
        if procedure {
            procedure_amount += row.net_amount;
        }

        let mut category = OpCategory::OtherOpRevenue;
        if consultation || procedure {
            category = OpCategory::ConsultationProcedures;
        }
        for rule in &rule_set.rules {
            if rule.predicate.matches(&input) {
                category = rule.category;
            }
        }

        let bucket = buckets.entry(category).or_default();
        bucket.visits += 1;
        bucket.amount += row.net_amount;
    }

    let summary_rows = OpCategory::display_order()
        .into_iter()
        .map(|category| {
            let (visits, amount) = buckets
                .get(&category)
                .map_or((0, 0.0), |b| (b.visits, b.amount));
            let amount = if category == OpCategory::ConsultationProcedures {
                consultation_amount + procedure_amount
            } else {
                amount
            };
            OpSummaryRow {
                category: category.display_name().to_string(),
                total_visits: visits,
                total_amount: amount,
            }
        })
        .collect();

    OpSummary { rows: summary_rows }
}
