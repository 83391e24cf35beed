//! Bill Calculator
//!
//! Converts one order (purchased line items plus a timestamp) into a
//! fully itemized, immutable [`Bill`]. Pure transform: no clock reads,
//! no I/O, no input mutation.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use shared::models::{Bill, BillItem, LineItem};

use super::money::{SERVICE_CHARGE_PERCENT, TAX_RATE_PERCENT, percent, to_decimal, to_f64};

/// Payment method recorded when the checkout does not specify one
pub const DEFAULT_PAYMENT_METHOD: &str = "Cash";

/// Issues bill numbers in the `BILL-YYYYMMDD-XXXX` format.
///
/// The suffix is a per-date monotonic sequence. Each calendar date keeps
/// its own counter, so numbers stay unique even when dates interleave
/// (an unsorted batch of orders, for instance). One generator per
/// register; numbers from distinct registers are not coordinated.
#[derive(Debug, Clone, Default)]
pub struct BillNumberGenerator {
    sequences: HashMap<NaiveDate, u32>,
}

impl BillNumberGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next bill number for the given date
    pub fn next(&mut self, date: NaiveDate) -> String {
        let seq = self.sequences.entry(date).or_insert(0);
        *seq += 1;
        format!("BILL-{}-{:04}", date.format("%Y%m%d"), seq)
    }
}

/// Calculate the financial breakdown of one order.
///
/// `items` may be empty, producing an all-zero bill. Quantities and
/// prices are expected to be non-negative; this function does not
/// validate its input, it propagates the arithmetic.
pub fn calculate_bill(
    bill_number: impl Into<String>,
    items: &[LineItem],
    issued_at: NaiveDateTime,
    payment_method: &str,
    notes: &str,
) -> Bill {
    let mut subtotal = Decimal::ZERO;
    let bill_items: Vec<BillItem> = items
        .iter()
        .map(|item| {
            let line = to_decimal(item.unit_price) * Decimal::from(item.quantity);
            subtotal += line;
            BillItem {
                name: item.name.clone(),
                quantity: item.quantity,
                unit_price: item.unit_price,
                subtotal: to_f64(line),
            }
        })
        .collect();

    let tax = subtotal * percent(TAX_RATE_PERCENT);
    let service_charge = subtotal * percent(SERVICE_CHARGE_PERCENT);
    let total = subtotal + tax + service_charge;

    Bill {
        bill_number: bill_number.into(),
        date: issued_at.date(),
        time: issued_at.time(),
        items: bill_items,
        subtotal: to_f64(subtotal),
        tax: to_f64(tax),
        service_charge: to_f64(service_charge),
        total: to_f64(total),
        payment_method: payment_method.to_string(),
        notes: notes.to_string(),
    }
}
