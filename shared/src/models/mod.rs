//! Data models
//!
//! Shared between the engine, export and CLI crates.
//! Money fields are `f64` (computed with decimal precision upstream);
//! catalog IDs are stringified snowflake i64s.

pub mod bill;
pub mod cart;
pub mod category;
pub mod product;
pub mod report;

// Re-exports
pub use bill::*;
pub use cart::*;
pub use category::*;
pub use product::*;
pub use report::*;
