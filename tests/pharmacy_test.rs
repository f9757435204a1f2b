#[cfg(test)]
mod tests {
    use revenue_report::algorithm::pharmacy;
    use revenue_report::config::RuleConfig;
    use revenue_report::models::{PharmacyRow, PharmacySummary};

    fn sale(reg: &str, remarks: &str, total: Option<f64>) -> PharmacyRow {
        PharmacyRow {
            total,
            reg_number: reg.to_string(),
            remarks: remarks.to_string(),
        }
    }

    fn amount(summary: &PharmacySummary, channel: &str) -> f64 {
        summary
            .rows
            .iter()
            .find(|r| r.channel == channel)
            .unwrap()
            .total_amount
    }

    #[test]
    fn test_channel_order_is_fixed() {
        let config = RuleConfig::default();
        let summary = pharmacy::summarize(&[], &config.pharmacy_channels);

        let channels: Vec<&str> = summary.rows.iter().map(|r| r.channel.as_str()).collect();
        assert_eq!(
            channels,
            vec![
                "Home Visit Sales",
                "IP Discharge patient Revisit Sales",
                "ER Pharmacy Sales",
                "OTC/Outside Doctors Prescriptions",
                "OP Sales",
                "IP Pharmacy Sales",
            ]
        );
    }

    #[test]
    fn test_ip_channel_requires_marker() {
        let config = RuleConfig::default();
        let rows = vec![
            sale("IPIP-9", "IP Pharmacy Sales", Some(50.0)),
            sale("OP-12", "IP Pharmacy Sales", Some(70.0)),
        ];
        let summary = pharmacy::summarize(&rows, &config.pharmacy_channels);

        // The second row has the right remarks but no marker: it falls into
        // no channel at all.
        assert_eq!(amount(&summary, "IP Pharmacy Sales"), 50.0);
        let grand_total: f64 = summary.rows.iter().map(|r| r.total_amount).sum();
        assert_eq!(grand_total, 50.0);
    }

    #[test]
    fn test_outpatient_channels_require_marker_absence() {
        let config = RuleConfig::default();
        let rows = vec![
            sale("REG-1", "OP Sales", Some(30.0)),
            sale("IPIP-2", "OP Sales", Some(40.0)),
        ];
        let summary = pharmacy::summarize(&rows, &config.pharmacy_channels);

        assert_eq!(amount(&summary, "OP Sales"), 30.0);
    }

    #[test]
    fn test_remarks_are_trimmed_but_exact() {
        let config = RuleConfig::default();
        let rows = vec![
            sale("REG-1", "  ER Pharmacy Sales  ", Some(25.0)),
            sale("REG-2", "er pharmacy sales", Some(99.0)),
        ];
        let summary = pharmacy::summarize(&rows, &config.pharmacy_channels);

        assert_eq!(amount(&summary, "ER Pharmacy Sales"), 25.0);
    }

    #[test]
    fn test_missing_totals_contribute_nothing() {
        let config = RuleConfig::default();
        let rows = vec![
            sale("REG-1", "Home Visit Sales", Some(10.0)),
            sale("REG-2", "Home Visit Sales", None),
        ];
        let summary = pharmacy::summarize(&rows, &config.pharmacy_channels);

        assert_eq!(amount(&summary, "Home Visit Sales"), 10.0);
    }

    #[test]
    fn test_row_contributes_to_at_most_one_channel() {
        let config = RuleConfig::default();
        let rows = vec![sale("REG-1", "OTC/Outside Doctors Prescriptions", Some(60.0))];
        let summary = pharmacy::summarize(&rows, &config.pharmacy_channels);

        let contributing: Vec<&str> = summary
            .rows
            .iter()
            .filter(|r| r.total_amount > 0.0)
            .map(|r| r.channel.as_str())
            .collect();
        assert_eq!(contributing, vec!["OTC/Outside Doctors Prescriptions"]);
    }

    #[test]
    fn test_unmatched_remarks_are_dropped() {
        let config = RuleConfig::default();
        let rows = vec![sale("REG-1", "WALK IN", Some(80.0))];
        let summary = pharmacy::summarize(&rows, &config.pharmacy_channels);

        let grand_total: f64 = summary.rows.iter().map(|r| r.total_amount).sum();
        assert_eq!(grand_total, 0.0);
    }
}
