use anyhow::Context;
use clap::Parser;
use log::info;
use std::path::PathBuf;
use std::time::Instant;

use revenue_report::config::RuleConfig;
use revenue_report::{algorithm, reader, report};

/// Reduce a hospital revenue ledger and pharmacy sales ledger into one
/// categorized summary workbook
#[derive(Parser, Debug)]
#[command(name = "revenue-report", version)]
struct Args {
    /// Input workbook (.xlsx or .xls)
    #[arg(long, value_name = "FILE")]
    input: PathBuf,

    /// Worksheet holding the revenue ledger
    #[arg(long, default_value = "REVENUE REPORT for IP&OP")]
    revenue_sheet: String,

    /// Worksheet holding the pharmacy sales ledger
    #[arg(long, default_value = "PHARMACY SALES REPORT ")]
    pharmacy_sheet: String,

    /// Output workbook path
    #[arg(long, value_name = "FILE", default_value = "revenue_summary.xlsx")]
    output: PathBuf,

    /// JSON rule configuration overriding the built-in tables
    #[arg(long, value_name = "FILE")]
    rules: Option<PathBuf>,

    /// Count grand-total unique patients globally instead of summing the
    /// per-department counts
    #[arg(long, default_value_t = false)]
    global_unique_patients: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut config = match &args.rules {
        Some(path) => RuleConfig::from_json_file(path)
            .with_context(|| format!("Failed to load rules from {}", path.display()))?,
        None => RuleConfig::default(),
    };
    if args.global_unique_patients {
        config.global_unique_patient_total = true;
    }

    let start = Instant::now();
    let revenue = reader::load_sheet(&args.input, &args.revenue_sheet)?;
    let pharmacy = reader::load_sheet(&args.input, &args.pharmacy_sheet)?;
    info!(
        "Loaded {} revenue rows and {} pharmacy rows in {:?}",
        revenue.num_rows(),
        pharmacy.num_rows(),
        start.elapsed()
    );

    let start = Instant::now();
    let summary = algorithm::generate_report(&revenue, &pharmacy, &config)?;
    info!("Classified and aggregated in {:?}", start.elapsed());

    report::write_workbook(&summary, &args.output)?;
    info!(
        "Saved: {} with sheets for IP, OP and Pharmacy Revenue",
        args.output.display()
    );
    Ok(())
}
