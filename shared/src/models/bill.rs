//! Bill Model
//!
//! A bill is the immutable record of one completed checkout. It is
//! produced once by the bill calculator and never mutated afterwards;
//! the aggregators only read it.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A purchased line at checkout time - input to the bill calculator.
///
/// Ephemeral: built from cart contents, consumed by one
/// `calculate_bill` invocation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
}

impl LineItem {
    pub fn new(name: impl Into<String>, quantity: u32, unit_price: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price,
        }
    }
}

/// An itemized bill line with its computed subtotal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BillItem {
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
    /// quantity × unit_price
    pub subtotal: f64,
}

/// Bill entity - the financial breakdown of one order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bill {
    /// Human-readable identifier, `BILL-YYYYMMDD-XXXX`
    pub bill_number: String,
    /// Calendar date the bill was issued
    pub date: NaiveDate,
    /// Wall-clock time the bill was issued
    pub time: NaiveTime,
    pub items: Vec<BillItem>,
    /// Sum of item subtotals
    pub subtotal: f64,
    /// subtotal × tax rate
    pub tax: f64,
    /// subtotal × service charge rate
    pub service_charge: f64,
    /// subtotal + tax + service_charge
    pub total: f64,
    pub payment_method: String,
    pub notes: String,
}
