//! Spreadsheet export
//!
//! The export collaborator: receives fully-computed report records and
//! serializes each into an `.xlsx` workbook with named sheets, writing a
//! file named by report type and date/month key. Cell/binary encoding is
//! delegated to `rust_xlsxwriter`; this crate only does tabular layout.

pub mod bill;
pub mod daily;
pub mod monthly;

pub use bill::write_bill_workbook;
pub use daily::write_daily_workbook;
pub use monthly::write_monthly_workbook;

use shared::error::PosError;

/// Map a workbook error onto the unified error type
pub(crate) fn xlsx_err(e: rust_xlsxwriter::XlsxError) -> PosError {
    PosError::export(e.to_string())
}

/// Map entries sorted by key, for stable sheet output across runs
pub(crate) fn sorted_entries(map: &std::collections::HashMap<String, f64>) -> Vec<(&str, f64)> {
    let mut entries: Vec<(&str, f64)> = map.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
}
