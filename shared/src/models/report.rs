//! Report Models
//!
//! Derived records produced by the daily and monthly aggregators.
//! Recomputing a report from the same inputs is deterministic and
//! idempotent; reports never feed back into their own inputs.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::bill::Bill;

/// Sales attributed to one hour of the day (0-23)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HourlySales {
    pub hour: u32,
    pub sales: f64,
}

/// Daily report - one business day folded into totals and breakdowns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyReport {
    pub date: NaiveDate,
    /// The bills this report was derived from
    pub bills: Vec<Bill>,
    pub total_sales: f64,
    pub total_bills: i64,
    /// Category key → summed item subtotals
    pub sales_by_category: HashMap<String, f64>,
    /// Payment method (verbatim) → summed bill totals
    pub sales_by_payment_method: HashMap<String, f64>,
    /// Hour buckets sorted descending by sales; silent hours omitted
    pub peak_hours: Vec<HourlySales>,
}

/// Estimated monthly expenses.
///
/// Fixed fractions of total sales (30% ingredients, 25% wages,
/// 5% utilities, 5% other) - a projection model, not recorded costs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseEstimate {
    pub ingredients: f64,
    pub wages: f64,
    pub utilities: f64,
    pub other: f64,
}

impl ExpenseEstimate {
    /// Sum of all expense lines
    pub fn total(&self) -> f64 {
        self.ingredients + self.wages + self.utilities + self.other
    }
}

/// Monthly report - a month of daily reports rolled up
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyReport {
    /// Display label, e.g. "August 2026"
    pub month: String,
    pub total_bills: i64,
    pub total_sales: f64,
    pub sales_by_category: HashMap<String, f64>,
    pub average_daily_sales: f64,
    /// Assumes 1 bill = 1 customer
    pub total_customers: i64,
    pub sales_by_payment_method: HashMap<String, f64>,
    /// Per-day peak hour entries summed across the month, re-sorted
    pub peak_times: Vec<HourlySales>,
    pub expenses: ExpenseEstimate,
    /// total_sales − expenses.total()
    pub net_profit: f64,
}
