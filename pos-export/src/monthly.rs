//! Monthly report workbook: Monthly Summary + Daily Breakdown sheets

use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, Workbook, Worksheet};
use shared::error::PosResult;
use shared::models::{DailyReport, MonthlyReport};

use crate::{sorted_entries, xlsx_err};

/// How many peak hours the monthly summary lists
const PEAK_HOURS_SHOWN: usize = 5;

/// Write a monthly report to `monthly-report-{month}.xlsx` under `dir`.
///
/// `days` are the daily reports the monthly rollup was derived from;
/// they feed the per-day breakdown sheet.
pub fn write_monthly_workbook(
    report: &MonthlyReport,
    days: &[DailyReport],
    dir: &Path,
) -> PosResult<PathBuf> {
    let mut workbook = Workbook::new();
    write_summary_sheet(workbook.add_worksheet(), report)?;
    write_breakdown_sheet(workbook.add_worksheet(), days)?;

    let path = dir.join(format!("monthly-report-{}.xlsx", report.month));
    workbook.save(&path).map_err(xlsx_err)?;
    tracing::info!(path = %path.display(), "monthly workbook written");
    Ok(path)
}

fn write_summary_sheet(sheet: &mut Worksheet, report: &MonthlyReport) -> PosResult<()> {
    sheet.set_name("Monthly Summary").map_err(xlsx_err)?;
    let header_format = Format::new().set_bold();

    sheet
        .write_string_with_format(0, 0, "Monthly Sales Report", &header_format)
        .map_err(xlsx_err)?;
    sheet.write_string(1, 0, "Month:").map_err(xlsx_err)?;
    sheet.write_string(1, 1, &report.month).map_err(xlsx_err)?;
    sheet.write_string(2, 0, "Total Bills:").map_err(xlsx_err)?;
    sheet
        .write_number(2, 1, report.total_bills as f64)
        .map_err(xlsx_err)?;
    sheet.write_string(3, 0, "Total Sales:").map_err(xlsx_err)?;
    sheet.write_number(3, 1, report.total_sales).map_err(xlsx_err)?;
    sheet
        .write_string(4, 0, "Average Daily Sales:")
        .map_err(xlsx_err)?;
    sheet
        .write_number(4, 1, report.average_daily_sales)
        .map_err(xlsx_err)?;
    sheet.write_string(5, 0, "Total Customers:").map_err(xlsx_err)?;
    sheet
        .write_number(5, 1, report.total_customers as f64)
        .map_err(xlsx_err)?;

    let mut row = 7u32;

    sheet
        .write_string_with_format(row, 0, "Sales by Category", &header_format)
        .map_err(xlsx_err)?;
    row += 1;
    for (category, amount) in sorted_entries(&report.sales_by_category) {
        sheet.write_string(row, 0, category).map_err(xlsx_err)?;
        sheet.write_number(row, 1, amount).map_err(xlsx_err)?;
        row += 1;
    }

    row += 1;
    sheet
        .write_string_with_format(row, 0, "Sales by Payment Method", &header_format)
        .map_err(xlsx_err)?;
    row += 1;
    for (method, amount) in sorted_entries(&report.sales_by_payment_method) {
        sheet.write_string(row, 0, method).map_err(xlsx_err)?;
        sheet.write_number(row, 1, amount).map_err(xlsx_err)?;
        row += 1;
    }

    row += 1;
    sheet
        .write_string_with_format(row, 0, "Peak Hours", &header_format)
        .map_err(xlsx_err)?;
    row += 1;
    for entry in report.peak_times.iter().take(PEAK_HOURS_SHOWN) {
        sheet
            .write_string(row, 0, format!("{}:00", entry.hour))
            .map_err(xlsx_err)?;
        sheet.write_number(row, 1, entry.sales).map_err(xlsx_err)?;
        row += 1;
    }

    // Projection model, not recorded costs - say so on the sheet
    row += 1;
    sheet
        .write_string_with_format(row, 0, "Expenses (estimated)", &header_format)
        .map_err(xlsx_err)?;
    row += 1;
    let expenses = [
        ("Ingredients:", report.expenses.ingredients),
        ("Wages:", report.expenses.wages),
        ("Utilities:", report.expenses.utilities),
        ("Other:", report.expenses.other),
    ];
    for (label, value) in expenses {
        sheet.write_string(row, 0, label).map_err(xlsx_err)?;
        sheet.write_number(row, 1, value).map_err(xlsx_err)?;
        row += 1;
    }

    row += 1;
    sheet
        .write_string_with_format(row, 0, "Net Profit:", &header_format)
        .map_err(xlsx_err)?;
    sheet.write_number(row, 1, report.net_profit).map_err(xlsx_err)?;

    sheet.set_column_width(0, 24).map_err(xlsx_err)?;
    Ok(())
}

fn write_breakdown_sheet(sheet: &mut Worksheet, days: &[DailyReport]) -> PosResult<()> {
    sheet.set_name("Daily Breakdown").map_err(xlsx_err)?;
    let header_format = Format::new().set_bold();

    let headers = [
        "Date",
        "Total Bills",
        "Total Sales",
        "Peak Hour",
        "Peak Hour Sales",
    ];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(xlsx_err)?;
    }

    for (idx, day) in days.iter().enumerate() {
        let row = (idx + 1) as u32;
        sheet
            .write_string(row, 0, day.date.to_string())
            .map_err(xlsx_err)?;
        sheet
            .write_number(row, 1, day.total_bills as f64)
            .map_err(xlsx_err)?;
        sheet.write_number(row, 2, day.total_sales).map_err(xlsx_err)?;

        if let Some(peak) = day.peak_hours.first() {
            sheet
                .write_string(row, 3, format!("{}:00", peak.hour))
                .map_err(xlsx_err)?;
            sheet.write_number(row, 4, peak.sales).map_err(xlsx_err)?;
        }
    }

    sheet.set_column_width(0, 14).map_err(xlsx_err)?;
    Ok(())
}
