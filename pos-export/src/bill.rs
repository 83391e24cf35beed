//! Single-bill workbook

use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, Workbook, Worksheet};
use shared::error::PosResult;
use shared::models::Bill;

use crate::xlsx_err;

/// Write one bill to `bill-{bill_number}.xlsx` under `dir`.
///
/// Returns the path of the written file.
pub fn write_bill_workbook(bill: &Bill, dir: &Path) -> PosResult<PathBuf> {
    let mut workbook = Workbook::new();
    write_bill_sheet(workbook.add_worksheet(), bill)?;

    let path = dir.join(format!("bill-{}.xlsx", bill.bill_number));
    workbook.save(&path).map_err(xlsx_err)?;
    tracing::info!(path = %path.display(), "bill workbook written");
    Ok(path)
}

fn write_bill_sheet(sheet: &mut Worksheet, bill: &Bill) -> PosResult<()> {
    sheet.set_name("Bill").map_err(xlsx_err)?;
    let header_format = Format::new().set_bold();

    sheet.write_string(0, 0, "Bill Number:").map_err(xlsx_err)?;
    sheet.write_string(0, 1, &bill.bill_number).map_err(xlsx_err)?;
    sheet.write_string(1, 0, "Date:").map_err(xlsx_err)?;
    sheet.write_string(1, 1, bill.date.to_string()).map_err(xlsx_err)?;
    sheet.write_string(2, 0, "Time:").map_err(xlsx_err)?;
    sheet.write_string(2, 1, bill.time.to_string()).map_err(xlsx_err)?;

    // Item table
    let headers = ["Item", "Quantity", "Unit Price", "Subtotal"];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(4, col as u16, *header, &header_format)
            .map_err(xlsx_err)?;
    }

    let mut row = 5u32;
    for item in &bill.items {
        sheet.write_string(row, 0, &item.name).map_err(xlsx_err)?;
        sheet
            .write_number(row, 1, item.quantity as f64)
            .map_err(xlsx_err)?;
        sheet.write_number(row, 2, item.unit_price).map_err(xlsx_err)?;
        sheet.write_number(row, 3, item.subtotal).map_err(xlsx_err)?;
        row += 1;
    }

    // Totals footer
    row += 1;
    let footer = [
        ("Subtotal:", bill.subtotal),
        ("Tax:", bill.tax),
        ("Service Charge:", bill.service_charge),
        ("Total:", bill.total),
    ];
    for (label, value) in footer {
        sheet.write_string(row, 0, label).map_err(xlsx_err)?;
        sheet.write_number(row, 3, value).map_err(xlsx_err)?;
        row += 1;
    }

    row += 1;
    sheet.write_string(row, 0, "Payment Method:").map_err(xlsx_err)?;
    sheet
        .write_string(row, 1, &bill.payment_method)
        .map_err(xlsx_err)?;
    sheet.write_string(row + 1, 0, "Notes:").map_err(xlsx_err)?;
    sheet.write_string(row + 1, 1, &bill.notes).map_err(xlsx_err)?;

    sheet.set_column_width(0, 20).map_err(xlsx_err)?;
    Ok(())
}
