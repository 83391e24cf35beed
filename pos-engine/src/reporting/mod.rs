//! Reporting engine
//!
//! Three layered, pure components, each depending only on the one below:
//!
//! 1. Bill calculator - one order plus a timestamp → an itemized [`Bill`]
//!    with tax, service charge and total.
//! 2. Daily aggregator - a day's bills → a [`DailyReport`] with totals,
//!    category/payment breakdowns and an hour-ranked sales histogram.
//! 3. Monthly aggregator - a month of daily reports → a [`MonthlyReport`]
//!    with rollups, averaged daily sales, the expense projection and net
//!    profit.
//!
//! [`Bill`]: shared::models::Bill
//! [`DailyReport`]: shared::models::DailyReport
//! [`MonthlyReport`]: shared::models::MonthlyReport

pub mod bill;
pub mod daily;
pub mod monthly;
mod money;

pub use bill::{BillNumberGenerator, DEFAULT_PAYMENT_METHOD, calculate_bill};
pub use daily::aggregate_daily;
pub use monthly::aggregate_monthly;

use std::collections::HashMap;

use shared::models::HourlySales;

/// Rank hour buckets by descending sales.
///
/// Hours that saw no sales never enter the map, so they are absent from
/// the result rather than zero-filled. Tie order between equal-sales
/// hours is unspecified.
pub(crate) fn rank_hours(buckets: HashMap<u32, f64>) -> Vec<HourlySales> {
    let mut ranked: Vec<HourlySales> = buckets
        .into_iter()
        .map(|(hour, sales)| HourlySales { hour, sales })
        .collect();
    ranked.sort_by(|a, b| b.sales.partial_cmp(&a.sales).unwrap_or(std::cmp::Ordering::Equal));
    ranked
}
