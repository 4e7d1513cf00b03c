//! Date-scoped value sets and per-entity calculated snapshots.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Credit and balance figures of an account as of one date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountValues {
    /// Granted credit effective for the month containing the date (0 if no entry).
    pub credit: Decimal,
    /// Balance: sum of posting values dated on or before the date.
    pub balance: Decimal,
}

impl AccountValues {
    /// Creates a value set.
    #[must_use]
    pub const fn new(credit: Decimal, balance: Decimal) -> Self {
        Self { credit, balance }
    }

    /// Available amount: granted credit plus the (typically negative) balance.
    #[must_use]
    pub fn available(&self) -> Decimal {
        self.credit + self.balance
    }
}

impl std::ops::Add for AccountValues {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            credit: self.credit + other.credit,
            balance: self.balance + other.balance,
        }
    }
}

impl std::ops::AddAssign for AccountValues {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

/// Budget-vs-actual figures of a budget account as of one date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetValues {
    /// Net budget figure (income − expenses) for the month containing the date.
    pub budget: Decimal,
    /// Posted amount within the month, up to and including the date.
    pub posted: Decimal,
}

impl BudgetValues {
    /// Creates a value set.
    #[must_use]
    pub const fn new(budget: Decimal, posted: Decimal) -> Self {
        Self { budget, posted }
    }

    /// Remaining budget for the month: budget − posted.
    #[must_use]
    pub fn available(&self) -> Decimal {
        self.budget - self.posted
    }

    /// Classifies the budget-vs-actual position.
    #[must_use]
    pub fn variance_status(&self) -> VarianceStatus {
        match self.available().cmp(&Decimal::ZERO) {
            std::cmp::Ordering::Greater => VarianceStatus::Favorable,
            std::cmp::Ordering::Less => VarianceStatus::Unfavorable,
            std::cmp::Ordering::Equal => VarianceStatus::OnBudget,
        }
    }
}

impl std::ops::Add for BudgetValues {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            budget: self.budget + other.budget,
            posted: self.posted + other.posted,
        }
    }
}

impl std::ops::AddAssign for BudgetValues {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

/// Budget-vs-actual classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarianceStatus {
    /// Actual is within budget.
    Favorable,
    /// Actual exactly meets budget.
    OnBudget,
    /// Actual exceeds budget.
    Unfavorable,
}

/// Balance of a contact account as of one date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactValues {
    /// Balance: sum of posting values dated on or before the date.
    pub balance: Decimal,
}

impl ContactValues {
    /// Creates a value set.
    #[must_use]
    pub const fn new(balance: Decimal) -> Self {
        Self { balance }
    }

    /// Classifies the contact by balance sign.
    #[must_use]
    pub fn role(&self) -> ContactRole {
        match self.balance.cmp(&Decimal::ZERO) {
            std::cmp::Ordering::Greater => ContactRole::Debtor,
            std::cmp::Ordering::Less => ContactRole::Creditor,
            std::cmp::Ordering::Equal => ContactRole::Settled,
        }
    }
}

/// Debtor/creditor classification of a contact account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactRole {
    /// The contact owes us (positive balance).
    Debtor,
    /// We owe the contact (negative balance).
    Creditor,
    /// Zero balance.
    Settled,
}

/// Calculated snapshot of an account for one status date.
///
/// Besides the values at the status date itself, period-close reporting
/// reads the figures at the end of the previous month and previous year;
/// all three come from the same summation primitive with different windows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountStatus {
    /// Values as of the status date.
    pub values_at_status_date: AccountValues,
    /// Values as of the last day of the month before the status date.
    pub values_at_end_of_last_month: AccountValues,
    /// Values as of December 31st of the year before the status date.
    pub values_at_end_of_last_year: AccountValues,
}

/// Calculated snapshot of a budget account for one status date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetStatus {
    /// Values as of the status date.
    pub values_at_status_date: BudgetValues,
    /// Values as of the last day of the month before the status date.
    pub values_at_end_of_last_month: BudgetValues,
    /// Values as of December 31st of the year before the status date.
    pub values_at_end_of_last_year: BudgetValues,
}

/// Calculated snapshot of a contact account for one status date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactStatus {
    /// Values as of the status date.
    pub values_at_status_date: ContactValues,
    /// Values as of the last day of the month before the status date.
    pub values_at_end_of_last_month: ContactValues,
    /// Values as of December 31st of the year before the status date.
    pub values_at_end_of_last_year: ContactValues,
}
