//! Monthly info entry types.

use kontiva_shared::YearMonth;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An entry keyed to one calendar month.
pub trait MonthlyInfo {
    /// The month this entry is effective for.
    fn year_month(&self) -> YearMonth;
}

/// Credit limit effective for one month of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditInfo {
    /// The month this entry is effective for.
    pub year_month: YearMonth,
    /// Granted credit for the month (≥ 0).
    pub credit: Decimal,
}

impl CreditInfo {
    /// Creates a credit info entry.
    #[must_use]
    pub const fn new(year_month: YearMonth, credit: Decimal) -> Self {
        Self { year_month, credit }
    }
}

impl MonthlyInfo for CreditInfo {
    fn year_month(&self) -> YearMonth {
        self.year_month
    }
}

/// Budget figures effective for one month of a budget account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetInfo {
    /// The month this entry is effective for.
    pub year_month: YearMonth,
    /// Budgeted income for the month.
    pub income: Decimal,
    /// Budgeted expenses for the month.
    pub expenses: Decimal,
}

impl BudgetInfo {
    /// Creates a budget info entry.
    #[must_use]
    pub const fn new(year_month: YearMonth, income: Decimal, expenses: Decimal) -> Self {
        Self {
            year_month,
            income,
            expenses,
        }
    }

    /// Net budget figure for the month: income − expenses.
    #[must_use]
    pub fn budget(&self) -> Decimal {
        self.income - self.expenses
    }
}

impl MonthlyInfo for BudgetInfo {
    fn year_month(&self) -> YearMonth {
        self.year_month
    }
}

/// Recorded balance for one month of a contact account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    /// The month this entry is effective for.
    pub year_month: YearMonth,
    /// Recorded end-of-month balance.
    pub balance: Decimal,
}

impl ContactInfo {
    /// Creates a contact info entry.
    #[must_use]
    pub const fn new(year_month: YearMonth, balance: Decimal) -> Self {
        Self {
            year_month,
            balance,
        }
    }
}

impl MonthlyInfo for ContactInfo {
    fn year_month(&self) -> YearMonth {
        self.year_month
    }
}
