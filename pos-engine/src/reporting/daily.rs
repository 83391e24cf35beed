//! Daily Aggregator
//!
//! Folds one business day's bills into a [`DailyReport`]. Deterministic
//! and idempotent: the same bill set always yields the same report.

use std::collections::HashMap;

use chrono::{NaiveDate, Timelike};
use shared::models::{Bill, DailyReport};

use super::rank_hours;

/// Category key for a bill item: the first whitespace-delimited token of
/// the item name. A simplified proxy for a real product→category join;
/// bills deliberately carry no catalog references.
///
/// Leading and repeated whitespace is skipped, so a padded name like
/// `"  Iced Latte"` keys as `"Iced"` rather than an empty string (a
/// deliberate tightening over splitting at the first space).
fn category_key(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or(name)
}

/// Aggregate one day of bills into a daily report.
///
/// The report date is the first bill's date; an empty bill set yields a
/// zero-valued report dated `as_of`. Each bill's full total is
/// attributed to the hour bucket of its issue time (a bill never splits
/// across an hour boundary).
pub fn aggregate_daily(bills: &[Bill], as_of: NaiveDate) -> DailyReport {
    let mut sales_by_category: HashMap<String, f64> = HashMap::new();
    let mut sales_by_payment_method: HashMap<String, f64> = HashMap::new();
    let mut hourly: HashMap<u32, f64> = HashMap::new();

    for bill in bills {
        *sales_by_payment_method
            .entry(bill.payment_method.clone())
            .or_insert(0.0) += bill.total;
        *hourly.entry(bill.time.hour()).or_insert(0.0) += bill.total;

        for item in &bill.items {
            *sales_by_category
                .entry(category_key(&item.name).to_string())
                .or_insert(0.0) += item.subtotal;
        }
    }

    let total_sales: f64 = bills.iter().map(|b| b.total).sum();

    tracing::debug!(
        bills = bills.len(),
        total_sales,
        "aggregated daily report"
    );

    DailyReport {
        date: bills.first().map(|b| b.date).unwrap_or(as_of),
        bills: bills.to_vec(),
        total_sales,
        total_bills: bills.len() as i64,
        sales_by_category,
        sales_by_payment_method,
        peak_hours: rank_hours(hourly),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporting::calculate_bill;
    use chrono::NaiveDateTime;
    use shared::models::LineItem;

    const EPS: f64 = 1e-9;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 14)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 14).unwrap()
    }

    fn cafe_bill(number: &str, hour: u32, method: &str) -> Bill {
        let items = vec![
            LineItem::new("Cappuccino", 2, 4.99),
            LineItem::new("Club Sandwich", 1, 12.99),
        ];
        calculate_bill(number, &items, at(hour, 15), method, "")
    }

    #[test]
    fn test_empty_day_is_zero_report_dated_as_of() {
        let report = aggregate_daily(&[], day());
        assert_eq!(report.date, day());
        assert_eq!(report.total_bills, 0);
        assert_eq!(report.total_sales, 0.0);
        assert!(report.sales_by_category.is_empty());
        assert!(report.sales_by_payment_method.is_empty());
        assert!(report.peak_hours.is_empty());
    }

    #[test]
    fn test_single_bill_report() {
        let report = aggregate_daily(&[cafe_bill("BILL-20260814-0001", 12, "Cash")], day());

        assert_eq!(report.total_bills, 1);
        assert!((report.total_sales - 26.4155).abs() < EPS);
        // First-token category heuristic
        assert!((report.sales_by_category["Cappuccino"] - 9.98).abs() < EPS);
        assert!((report.sales_by_category["Club"] - 12.99).abs() < EPS);
        assert_eq!(report.sales_by_category.len(), 2);
    }

    #[test]
    fn test_category_key_skips_padding_whitespace() {
        let items = vec![LineItem::new("  Iced  Latte", 1, 4.49)];
        let bill = calculate_bill("BILL-20260814-0001", &items, at(10, 0), "Cash", "");
        let report = aggregate_daily(&[bill], day());

        assert!((report.sales_by_category["Iced"] - 4.49).abs() < EPS);
        assert!(!report.sales_by_category.contains_key(""));
    }

    #[test]
    fn test_payment_sums_equal_bill_totals() {
        let bills = vec![
            cafe_bill("BILL-20260814-0001", 9, "Cash"),
            cafe_bill("BILL-20260814-0002", 12, "Card"),
            cafe_bill("BILL-20260814-0003", 12, "Cash"),
        ];
        let report = aggregate_daily(&bills, day());

        let method_sum: f64 = report.sales_by_payment_method.values().sum();
        let bill_sum: f64 = bills.iter().map(|b| b.total).sum();
        assert!((method_sum - bill_sum).abs() < EPS);
        assert!(
            (report.sales_by_payment_method["Cash"] - 2.0 * 26.4155).abs() < 1e-6
        );
    }

    #[test]
    fn test_category_sums_conserve_item_subtotals() {
        let bills = vec![
            cafe_bill("BILL-20260814-0001", 10, "Cash"),
            cafe_bill("BILL-20260814-0002", 16, "Card"),
        ];
        let report = aggregate_daily(&bills, day());

        let category_sum: f64 = report.sales_by_category.values().sum();
        let item_sum: f64 = bills
            .iter()
            .flat_map(|b| &b.items)
            .map(|i| i.subtotal)
            .sum();
        assert!((category_sum - item_sum).abs() < EPS);
    }

    #[test]
    fn test_hour_buckets_and_ranking() {
        // Two bills at 12:xx, one at 9:xx - the 12 o'clock bucket wins
        let bills = vec![
            cafe_bill("BILL-20260814-0001", 9, "Cash"),
            cafe_bill("BILL-20260814-0002", 12, "Card"),
            cafe_bill("BILL-20260814-0003", 12, "Cash"),
        ];
        let report = aggregate_daily(&bills, day());

        assert_eq!(report.peak_hours.len(), 2);
        assert_eq!(report.peak_hours[0].hour, 12);
        assert!((report.peak_hours[0].sales - 2.0 * 26.4155).abs() < 1e-6);
        assert_eq!(report.peak_hours[1].hour, 9);
        assert!(report.peak_hours[0].sales >= report.peak_hours[1].sales);
    }

    #[test]
    fn test_order_independence() {
        let mut bills = vec![
            cafe_bill("BILL-20260814-0001", 9, "Cash"),
            cafe_bill("BILL-20260814-0002", 12, "Card"),
            cafe_bill("BILL-20260814-0003", 20, "Cash"),
        ];
        let forward = aggregate_daily(&bills, day());
        bills.reverse();
        let backward = aggregate_daily(&bills, day());

        assert!((forward.total_sales - backward.total_sales).abs() < EPS);
        assert_eq!(forward.sales_by_category, backward.sales_by_category);
        assert_eq!(
            forward.sales_by_payment_method,
            backward.sales_by_payment_method
        );
        // peak ordering for ties may vary; the (hour, sales) set must not
        let mut f: Vec<_> = forward.peak_hours.iter().map(|p| (p.hour, p.sales)).collect();
        let mut b: Vec<_> = backward.peak_hours.iter().map(|p| (p.hour, p.sales)).collect();
        f.sort_by(|a, b| a.0.cmp(&b.0));
        b.sort_by(|a, b| a.0.cmp(&b.0));
        assert_eq!(f, b);
    }

    #[test]
    fn test_report_date_comes_from_first_bill() {
        let other_day = NaiveDate::from_ymd_opt(2026, 8, 20).unwrap();
        let report = aggregate_daily(&[cafe_bill("BILL-20260814-0001", 11, "Cash")], other_day);
        assert_eq!(report.date, day());
    }
}
