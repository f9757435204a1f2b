//! Output workbook emission
//!
//! Writes the three summary tables as the sheets "IP Revenue", "OP Revenue"
//! and "Pharmacy Revenue" of one `.xlsx` workbook.

use log::info;
use std::path::Path;
use umya_spreadsheet::Worksheet;

use crate::error::{Error, Result};
use crate::models::RevenueReport;

/// Write the report as a three-sheet workbook at the given path
pub fn write_workbook(report: &RevenueReport, path: &Path) -> Result<()> {
    let mut book = umya_spreadsheet::new_file();

    let sheet = new_sheet(&mut book, "IP Revenue")?;
    write_header(sheet, &["ADMITTING CATEGORY", "UNIQUE_PATIENTS", "TOTAL_AMOUNT"]);
    for (i, row) in report.inpatient.rows.iter().enumerate() {
        let r = data_row(i);
        sheet.get_cell_mut((1, r)).set_value(row.department.as_str());
        sheet
            .get_cell_mut((2, r))
            .set_value_number(row.unique_patients as f64);
        sheet.get_cell_mut((3, r)).set_value_number(row.total_amount);
    }

    let sheet = new_sheet(&mut book, "OP Revenue")?;
    write_header(sheet, &["ADMITTING CATEGORY", "TOTAL_VISITS", "TOTAL_AMOUNT"]);
    for (i, row) in report.outpatient.rows.iter().enumerate() {
        let r = data_row(i);
        sheet.get_cell_mut((1, r)).set_value(row.category.as_str());
        sheet
            .get_cell_mut((2, r))
            .set_value_number(row.total_visits as f64);
        sheet.get_cell_mut((3, r)).set_value_number(row.total_amount);
    }

    let sheet = new_sheet(&mut book, "Pharmacy Revenue")?;
    write_header(sheet, &["Category", "Total (₹)"]);
    for (i, row) in report.pharmacy.rows.iter().enumerate() {
        let r = data_row(i);
        sheet.get_cell_mut((1, r)).set_value(row.channel.as_str());
        sheet.get_cell_mut((2, r)).set_value_number(row.total_amount);
    }

    // Drop the default sheet the new workbook is seeded with.
    book.remove_sheet_by_name("Sheet1")
        .map_err(|e| Error::Report(e.to_string()))?;

    umya_spreadsheet::writer::xlsx::write(&book, path)
        .map_err(|e| Error::Report(format!("{e:?}")))?;
    info!("Saved report to {}", path.display());
    Ok(())
}

fn new_sheet<'a>(
    book: &'a mut umya_spreadsheet::Spreadsheet,
    name: &str,
) -> Result<&'a mut Worksheet> {
    book.new_sheet(name)
        .map_err(|e| Error::Report(e.to_string()))
}

fn write_header(sheet: &mut Worksheet, names: &[&str]) {
    for (i, name) in names.iter().enumerate() {
        sheet.get_cell_mut((i as u32 + 1, 1)).set_value(*name);
    }
}

/// 1-based worksheet row for the i-th data row, under the header
const fn data_row(i: usize) -> u32 {
    i as u32 + 2
}
