//! Daily report workbook: Summary + Detailed Bills sheets

use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, Workbook, Worksheet};
use shared::error::PosResult;
use shared::models::DailyReport;

use crate::{sorted_entries, xlsx_err};

/// Write a daily report to `daily-report-{date}.xlsx` under `dir`.
pub fn write_daily_workbook(report: &DailyReport, dir: &Path) -> PosResult<PathBuf> {
    let mut workbook = Workbook::new();
    write_summary_sheet(workbook.add_worksheet(), report)?;
    write_bills_sheet(workbook.add_worksheet(), report)?;

    let path = dir.join(format!("daily-report-{}.xlsx", report.date));
    workbook.save(&path).map_err(xlsx_err)?;
    tracing::info!(path = %path.display(), "daily workbook written");
    Ok(path)
}

fn write_summary_sheet(sheet: &mut Worksheet, report: &DailyReport) -> PosResult<()> {
    sheet.set_name("Summary").map_err(xlsx_err)?;
    let header_format = Format::new().set_bold();

    sheet
        .write_string_with_format(0, 0, "Daily Sales Report", &header_format)
        .map_err(xlsx_err)?;
    sheet.write_string(1, 0, "Date:").map_err(xlsx_err)?;
    sheet.write_string(1, 1, report.date.to_string()).map_err(xlsx_err)?;
    sheet.write_string(2, 0, "Total Bills:").map_err(xlsx_err)?;
    sheet
        .write_number(2, 1, report.total_bills as f64)
        .map_err(xlsx_err)?;
    sheet.write_string(3, 0, "Total Sales:").map_err(xlsx_err)?;
    sheet.write_number(3, 1, report.total_sales).map_err(xlsx_err)?;

    let mut row = 5u32;

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
    for entry in &report.peak_hours {
        sheet
            .write_string(row, 0, format!("{}:00", entry.hour))
            .map_err(xlsx_err)?;
        sheet.write_number(row, 1, entry.sales).map_err(xlsx_err)?;
        row += 1;
    }

    sheet.set_column_width(0, 24).map_err(xlsx_err)?;
    Ok(())
}

fn write_bills_sheet(sheet: &mut Worksheet, report: &DailyReport) -> PosResult<()> {
    sheet.set_name("Detailed Bills").map_err(xlsx_err)?;
    let header_format = Format::new().set_bold();

    let headers = [
        "Bill Number",
        "Time",
        "Items",
        "Subtotal",
        "Tax",
        "Service Charge",
        "Total",
        "Payment Method",
    ];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(xlsx_err)?;
    }

    for (idx, bill) in report.bills.iter().enumerate() {
        let row = (idx + 1) as u32;
        let items = bill
            .items
            .iter()
            .map(|i| format!("{} ({})", i.name, i.quantity))
            .collect::<Vec<_>>()
            .join(", ");

        sheet.write_string(row, 0, &bill.bill_number).map_err(xlsx_err)?;
        sheet
            .write_string(row, 1, bill.time.to_string())
            .map_err(xlsx_err)?;
        sheet.write_string(row, 2, items).map_err(xlsx_err)?;
        sheet.write_number(row, 3, bill.subtotal).map_err(xlsx_err)?;
        sheet.write_number(row, 4, bill.tax).map_err(xlsx_err)?;
        sheet
            .write_number(row, 5, bill.service_charge)
            .map_err(xlsx_err)?;
        sheet.write_number(row, 6, bill.total).map_err(xlsx_err)?;
        sheet
            .write_string(row, 7, &bill.payment_method)
            .map_err(xlsx_err)?;
    }

    sheet.set_column_width(0, 20).map_err(xlsx_err)?;
    sheet.set_column_width(2, 40).map_err(xlsx_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pos_engine::{aggregate_daily, calculate_bill};
    use shared::models::LineItem;

    #[test]
    fn test_daily_workbook_is_written() {
        let day = NaiveDate::from_ymd_opt(2026, 8, 14).unwrap();
        let bill = calculate_bill(
            "BILL-20260814-0001",
            &[LineItem::new("Club Sandwich", 1, 12.99)],
            day.and_hms_opt(12, 0, 0).unwrap(),
            "Card",
            "",
        );
        let report = aggregate_daily(&[bill], day);

        let dir = tempfile::tempdir().unwrap();
        let path = write_daily_workbook(&report, dir.path()).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "daily-report-2026-08-14.xlsx"
        );
        assert!(path.exists());
    }
}
