//! Money helpers for the reporting engine
//!
//! Bill arithmetic runs through `Decimal` internally and is converted to
//! `f64` for storage/serialization. No rounding is applied here: report
//! consumers format to two decimal places at the display/export edge.

use rust_decimal::prelude::*;

/// Tax rate applied to every bill subtotal (10%)
pub const TAX_RATE_PERCENT: i64 = 10;
/// Service charge rate applied to every bill subtotal (5%)
pub const SERVICE_CHARGE_PERCENT: i64 = 5;

/// Convert f64 to Decimal for calculation
#[inline]
pub(crate) fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage
#[inline]
pub(crate) fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

/// A whole-number percentage as an exact decimal fraction (10 → 0.10)
#[inline]
pub(crate) fn percent(value: i64) -> Decimal {
    Decimal::new(value, 2)
}
