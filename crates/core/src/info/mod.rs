//! Month-keyed info entries attached to account-family entities.
//!
//! Each account-family entity carries a collection of monthly figures:
//! credit limits for accounts, budget figures for budget accounts, and
//! recorded balances for contact accounts. Lookup is by exact (year, month);
//! a month without an entry contributes zero to every figure.

pub mod collection;
pub mod types;

pub use collection::InfoCollection;
pub use types::{BudgetInfo, ContactInfo, CreditInfo, MonthlyInfo};
