//! Calculation plumbing shared by all account-family entities.
//!
//! - Per-entity memoization keyed by status date
//! - Period boundary helpers (month/year windows)
//! - Error types for calculation preconditions

pub mod error;
pub mod period;
pub mod state;

pub use error::CalculateError;
pub use period::{end_of_previous_month, end_of_previous_year, start_of_month};
pub use state::CalculationState;
