//! POS engine
//!
//! The computational core of the POS: catalog administration, cart state
//! and checkout, and the reporting pipeline that folds completed orders
//! into bills, daily reports and monthly reports.
//!
//! The reporting functions are pure: they read their inputs, allocate a
//! new derived record, and never touch a clock, a lock or any shared
//! state. Sequencing the pipeline (orders → bills → day → month) is the
//! caller's responsibility.

pub mod cart;
pub mod catalog;
pub mod reporting;

// Re-exports
pub use cart::{Cart, Register};
pub use catalog::Catalog;
pub use reporting::{
    BillNumberGenerator, DEFAULT_PAYMENT_METHOD, aggregate_daily, aggregate_monthly,
    calculate_bill,
};
