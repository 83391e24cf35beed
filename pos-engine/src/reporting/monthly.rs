//! Monthly Aggregator
//!
//! Folds a month of daily reports into a [`MonthlyReport`]: rollups of
//! the per-day totals and breakdowns, averaged daily sales, the expense
//! projection and net profit.

use std::collections::HashMap;

use chrono::NaiveDate;
use shared::error::{PosError, PosResult};
use shared::models::{DailyReport, ExpenseEstimate, MonthlyReport};

use super::rank_hours;

/// Expense projection rates, as fractions of total sales.
///
/// There is no real expense ledger behind these figures; exports must
/// label them as estimates.
const INGREDIENTS_RATE: f64 = 0.30;
const WAGES_RATE: f64 = 0.25;
const UTILITIES_RATE: f64 = 0.05;
const OTHER_RATE: f64 = 0.05;

/// Aggregate a month of daily reports.
///
/// The month label is formatted from `as_of` (e.g. "August 2026");
/// grouping reports into the right month is the caller's job. An empty
/// `days` slice is rejected: averaged daily sales would divide by zero.
pub fn aggregate_monthly(days: &[DailyReport], as_of: NaiveDate) -> PosResult<MonthlyReport> {
    if days.is_empty() {
        return Err(PosError::business_rule(
            "monthly report requires at least one daily report",
        ));
    }

    let total_sales: f64 = days.iter().map(|d| d.total_sales).sum();
    let total_bills: i64 = days.iter().map(|d| d.total_bills).sum();

    let mut sales_by_category: HashMap<String, f64> = HashMap::new();
    let mut sales_by_payment_method: HashMap<String, f64> = HashMap::new();
    // Second-stage aggregation: sums the per-day peak entries, which are
    // themselves already hour sums of that day's bills.
    let mut hourly: HashMap<u32, f64> = HashMap::new();

    for day in days {
        for (category, amount) in &day.sales_by_category {
            *sales_by_category.entry(category.clone()).or_insert(0.0) += amount;
        }
        for (method, amount) in &day.sales_by_payment_method {
            *sales_by_payment_method.entry(method.clone()).or_insert(0.0) += amount;
        }
        for entry in &day.peak_hours {
            *hourly.entry(entry.hour).or_insert(0.0) += entry.sales;
        }
    }

    let expenses = ExpenseEstimate {
        ingredients: total_sales * INGREDIENTS_RATE,
        wages: total_sales * WAGES_RATE,
        utilities: total_sales * UTILITIES_RATE,
        other: total_sales * OTHER_RATE,
    };
    let net_profit = total_sales - expenses.total();

    tracing::debug!(
        days = days.len(),
        total_sales,
        net_profit,
        "aggregated monthly report"
    );

    Ok(MonthlyReport {
        month: as_of.format("%B %Y").to_string(),
        total_bills,
        total_sales,
        sales_by_category,
        average_daily_sales: total_sales / days.len() as f64,
        // One bill assumed to equal one customer
        total_customers: total_bills,
        sales_by_payment_method,
        peak_times: rank_hours(hourly),
        expenses,
        net_profit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporting::{aggregate_daily, calculate_bill};
    use shared::models::{Bill, LineItem};

    const EPS: f64 = 1e-9;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, d).unwrap()
    }

    fn cafe_bill(d: u32, hour: u32, method: &str) -> Bill {
        let items = vec![
            LineItem::new("Cappuccino", 2, 4.99),
            LineItem::new("Club Sandwich", 1, 12.99),
        ];
        let issued = day(d).and_hms_opt(hour, 30, 0).unwrap();
        calculate_bill("BILL-TEST", &items, issued, method, "")
    }

    fn daily(d: u32, hours: &[u32]) -> DailyReport {
        let bills: Vec<Bill> = hours.iter().map(|&h| cafe_bill(d, h, "Cash")).collect();
        aggregate_daily(&bills, day(d))
    }

    #[test]
    fn test_empty_month_is_rejected() {
        let err = aggregate_monthly(&[], day(1)).unwrap_err();
        assert!(matches!(err, PosError::BusinessRule { .. }));
    }

    #[test]
    fn test_single_day_reproduces_day_totals() {
        let report = daily(14, &[9, 12, 12]);
        let monthly = aggregate_monthly(std::slice::from_ref(&report), day(14)).unwrap();

        assert_eq!(monthly.total_bills, report.total_bills);
        assert!((monthly.total_sales - report.total_sales).abs() < EPS);
        assert!((monthly.average_daily_sales - report.total_sales).abs() < EPS);
        assert_eq!(monthly.sales_by_category, report.sales_by_category);
        assert_eq!(
            monthly.sales_by_payment_method,
            report.sales_by_payment_method
        );
        assert_eq!(monthly.total_customers, monthly.total_bills);
    }

    #[test]
    fn test_rollup_sums_across_days() {
        let days = vec![daily(14, &[9, 12]), daily(15, &[12, 19, 19])];
        let monthly = aggregate_monthly(&days, day(15)).unwrap();

        assert_eq!(monthly.total_bills, 5);
        assert!((monthly.total_sales - 5.0 * 26.4155).abs() < 1e-6);
        assert!((monthly.average_daily_sales - monthly.total_sales / 2.0).abs() < EPS);
        // Categories merged by key across days
        assert!((monthly.sales_by_category["Cappuccino"] - 5.0 * 9.98).abs() < 1e-6);
        assert!((monthly.sales_by_category["Club"] - 5.0 * 12.99).abs() < 1e-6);
    }

    #[test]
    fn test_peak_times_sum_per_day_peaks() {
        let days = vec![daily(14, &[12]), daily(15, &[12, 9])];
        let monthly = aggregate_monthly(&days, day(15)).unwrap();

        // Hour 12 appears on both days; its monthly bucket is the sum
        assert_eq!(monthly.peak_times[0].hour, 12);
        assert!((monthly.peak_times[0].sales - 2.0 * 26.4155).abs() < 1e-6);
        assert_eq!(monthly.peak_times.len(), 2);
    }

    #[test]
    fn test_expense_projection_rates() {
        // Build a synthetic day with a known round total
        let mut report = daily(14, &[12]);
        report.total_sales = 1000.0;

        let monthly = aggregate_monthly(std::slice::from_ref(&report), day(14)).unwrap();
        assert!((monthly.expenses.ingredients - 300.0).abs() < EPS);
        assert!((monthly.expenses.wages - 250.0).abs() < EPS);
        assert!((monthly.expenses.utilities - 50.0).abs() < EPS);
        assert!((monthly.expenses.other - 50.0).abs() < EPS);
        assert!((monthly.net_profit - 350.0).abs() < EPS);
    }

    #[test]
    fn test_month_label_comes_from_as_of() {
        let report = daily(14, &[12]);
        let monthly = aggregate_monthly(std::slice::from_ref(&report), day(14)).unwrap();
        assert_eq!(monthly.month, "August 2026");
    }
}
