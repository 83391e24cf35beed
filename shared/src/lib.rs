//! Shared types for the POS workspace
//!
//! Common types used across multiple crates: catalog and cart models,
//! bill and report records, error types, and small utilities.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{PosError, PosResult};
pub use models::{
    Bill, BillItem, CartItem, Category, DailyReport, ExpenseEstimate, HourlySales, LineItem,
    MonthlyReport, Product,
};
