//! The accounting aggregate: entity arena and calculation fan-out.

pub mod calculate;
pub mod groups;
pub mod types;


pub use groups::{AccountGroupStatus, BudgetAccountGroupStatus};
pub use types::Accounting;
