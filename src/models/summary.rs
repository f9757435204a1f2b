//! Summary tables produced by the aggregators.

/// One department row of the inpatient summary
#[derive(Debug, Clone, PartialEq)]
pub struct IpSummaryRow {
    /// Canonical department label, or "Total" for the grand-total row
    pub department: String,
    pub unique_patients: usize,
    pub total_amount: f64,
}

/// Inpatient revenue by canonical department, grand-total row last
#[derive(Debug, Clone, PartialEq)]
pub struct IpSummary {
    pub rows: Vec<IpSummaryRow>,
}

/// One category row of the outpatient summary
#[derive(Debug, Clone, PartialEq)]
pub struct OpSummaryRow {
    pub category: String,
    pub total_visits: usize,
    pub total_amount: f64,
}

/// Outpatient revenue by service category, in fixed display order
#[derive(Debug, Clone, PartialEq)]
pub struct OpSummary {
    pub rows: Vec<OpSummaryRow>,
}

/// One channel row of the pharmacy summary
#[derive(Debug, Clone, PartialEq)]
pub struct PharmacySummaryRow {
    pub channel: String,
    pub total_amount: f64,
}

/// Pharmacy revenue by sales channel, in rule-table order
#[derive(Debug, Clone, PartialEq)]
pub struct PharmacySummary {
    pub rows: Vec<PharmacySummaryRow>,
}

/// The three summary tables of one reduction run
#[derive(Debug, Clone, PartialEq)]
pub struct RevenueReport {
    pub inpatient: IpSummary,
    pub outpatient: OpSummary,
    pub pharmacy: PharmacySummary,
}
