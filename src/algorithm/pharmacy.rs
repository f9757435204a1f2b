//! Pharmacy revenue aggregation by sales channel.

use crate::config::ChannelRule;
use crate::models::{PharmacyRow, PharmacySummary, PharmacySummaryRow};

/// Substring of the registration number marking an inpatient-linked sale
pub const IP_MARKER: &str = "IPIP";

/// Summarize pharmacy rows: amount per channel, in rule-table order.
///
/// A row belongs to a channel only when its inpatient-marker state matches
/// the channel's requirement and its trimmed remarks equal the channel label
/// exactly. Rows matching no channel are excluded from every sum.
#[must_use]
pub fn summarize(rows: &[PharmacyRow], channels: &[ChannelRule]) -> PharmacySummary {
    let summary_rows = channels
        .iter()
        .map(|channel| {
            let total_amount = rows
                .iter()
                .filter(|row| {
                    row.reg_number.contains(IP_MARKER) == channel.requires_ip_marker
                        && row.remarks.trim() == channel.label
                })
                .filter_map(|row| row.total)
                .sum();
            PharmacySummaryRow {
                channel: channel.label.clone(),
                total_amount,
            }
        })
        .collect();

    PharmacySummary { rows: summary_rows }
}
