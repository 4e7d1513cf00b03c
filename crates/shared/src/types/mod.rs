//! Common types used across the application.

pub mod id;
pub mod year_month;

pub use id::*;
pub use year_month::YearMonth;
