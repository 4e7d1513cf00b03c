//! Account-family entities and their per-date snapshots.
//!
//! Accounts, budget accounts, and contact accounts are the three
//! structurally parallel aggregation targets: each owns a posting line
//! collection, a monthly info collection, and a memoized calculated
//! snapshot keyed by status date.

pub mod calculate;
pub mod status;
pub mod types;


pub use status::{
    AccountStatus, AccountValues, BudgetStatus, BudgetValues, ContactRole, ContactStatus,
    ContactValues, VarianceStatus,
};
pub use types::{Account, AccountGroup, AccountGroupType, BudgetAccount, BudgetAccountGroup, ContactAccount};
