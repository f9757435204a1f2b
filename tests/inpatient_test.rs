#[cfg(test)]
mod tests {
    use revenue_report::algorithm::inpatient;
    use revenue_report::config::RuleConfig;
    use revenue_report::models::{RevenueClass, TransactionRow};

    fn ip_row(identifier: &str, department: &str, amount: f64) -> TransactionRow {
        TransactionRow {
            net_amount: amount,
            ip_number: identifier.to_string(),
            admitting_department: Some(department.to_string()),
            header: "HOSPITAL CHARGES".to_string(),
            service_name: "WARD".to_string(),
            class: RevenueClass::from_identifier(identifier),
        }
    }

    #[test]
    fn test_single_row_summary() {
        let config = RuleConfig::default();
        let rows = vec![ip_row("IP001", "CARDIOLOGY DEPT", 1000.0)];
        let summary = inpatient::summarize(&rows, &config);

        assert_eq!(summary.rows.len(), 2);
        assert_eq!(summary.rows[0].department, "Cardiology");
        assert_eq!(summary.rows[0].unique_patients, 1);
        assert_eq!(summary.rows[0].total_amount, 1000.0);
        assert_eq!(summary.rows[1].department, "Total");
        assert_eq!(summary.rows[1].unique_patients, 1);
        assert_eq!(summary.rows[1].total_amount, 1000.0);
    }

    #[test]
    fn test_unique_patients_within_department() {
        let config = RuleConfig::default();
        let rows = vec![
            ip_row("IP001", "GENERAL MEDICINE", 100.0),
            ip_row("IP001", "GENERAL MEDICINE", 150.0),
            ip_row("IP002", "GENERAL MEDICINE", 200.0),
        ];
        let summary = inpatient::summarize(&rows, &config);

        assert_eq!(summary.rows[0].department, "General Medicine");
        assert_eq!(summary.rows[0].unique_patients, 2);
        assert_eq!(summary.rows[0].total_amount, 450.0);
    }

    #[test]
    fn test_total_row_sums_per_department_uniques() {
        // One patient under two departments counts twice in the literal total.
        let config = RuleConfig::default();
        let rows = vec![
            ip_row("IP001", "CARDIOLOGY", 100.0),
            ip_row("IP001", "UROLOGY", 200.0),
        ];
        let summary = inpatient::summarize(&rows, &config);

        let total = summary.rows.last().unwrap();
        assert_eq!(total.department, "Total");
        assert_eq!(total.unique_patients, 2);
        assert_eq!(total.total_amount, 300.0);
    }

    #[test]
    fn test_global_unique_patient_flag() {
        let config = RuleConfig {
            global_unique_patient_total: true,
            ..RuleConfig::default()
        };
        let rows = vec![
            ip_row("IP001", "CARDIOLOGY", 100.0),
            ip_row("IP001", "UROLOGY", 200.0),
        ];
        let summary = inpatient::summarize(&rows, &config);

        // Per-department rows are unchanged; only the total row switches to
        // the true global distinct count.
        assert_eq!(summary.rows[0].unique_patients, 1);
        assert_eq!(summary.rows[1].unique_patients, 1);
        let total = summary.rows.last().unwrap();
        assert_eq!(total.unique_patients, 1);
        assert_eq!(total.total_amount, 300.0);
    }

    #[test]
    fn test_unmatched_department_falls_into_others() {
        let config = RuleConfig::default();
        let rows = vec![ip_row("IP001", "DERMATOLOGY", 75.0)];
        let summary = inpatient::summarize(&rows, &config);

        assert_eq!(summary.rows[0].department, "Others");
        assert_eq!(summary.rows[0].total_amount, 75.0);
    }

    #[test]
    fn test_outpatient_rows_are_excluded() {
        let config = RuleConfig::default();
        let rows = vec![
            ip_row("IP001", "CARDIOLOGY", 100.0),
            ip_row("OP900", "CARDIOLOGY", 999.0),
        ];
        let summary = inpatient::summarize(&rows, &config);

        let total = summary.rows.last().unwrap();
        assert_eq!(total.total_amount, 100.0);
    }
}
