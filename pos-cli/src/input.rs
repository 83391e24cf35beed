//! Order file input schema
//!
//! The CLI consumes completed orders as a JSON array of records:
//!
//! ```json
//! [
//!   {
//!     "issued_at": "2026-08-14T12:30:00",
//!     "payment_method": "Card",
//!     "items": [
//!       { "name": "Cappuccino", "quantity": 2, "unit_price": 4.99 }
//!     ]
//!   }
//! ]
//! ```

use std::path::Path;

use anyhow::Context;
use chrono::NaiveDateTime;
use serde::Deserialize;
use shared::models::{Bill, LineItem};

use pos_engine::{BillNumberGenerator, DEFAULT_PAYMENT_METHOD, calculate_bill};

/// One completed order as captured at checkout
#[derive(Debug, Clone, Deserialize)]
pub struct OrderRecord {
    pub issued_at: NaiveDateTime,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub items: Vec<LineItem>,
}

impl OrderRecord {
    /// Calculate this order's bill, drawing the next number from `numbers`
    pub fn to_bill(&self, numbers: &mut BillNumberGenerator) -> Bill {
        calculate_bill(
            numbers.next(self.issued_at.date()),
            &self.items,
            self.issued_at,
            self.payment_method.as_deref().unwrap_or(DEFAULT_PAYMENT_METHOD),
            self.notes.as_deref().unwrap_or(""),
        )
    }
}

/// Load and parse an orders file
pub fn load_orders(path: &Path) -> anyhow::Result<Vec<OrderRecord>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading orders file {}", path.display()))?;
    let records: Vec<OrderRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing orders file {}", path.display()))?;
    tracing::debug!(orders = records.len(), "orders file loaded");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_record_parses_with_defaults() {
        let raw = r#"[
            {
                "issued_at": "2026-08-14T12:30:00",
                "items": [{ "name": "Cappuccino", "quantity": 2, "unit_price": 4.99 }]
            }
        ]"#;
        let records: Vec<OrderRecord> = serde_json::from_str(raw).unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].payment_method.is_none());

        let mut numbers = BillNumberGenerator::new();
        let bill = records[0].to_bill(&mut numbers);
        assert_eq!(bill.payment_method, "Cash");
        assert_eq!(bill.bill_number, "BILL-20260814-0001");
    }
}
