//! Per-entity snapshot calculation with status-date memoization.
//!
//! Entity-level snapshots sum strictly by date (no sort-order tie-break);
//! only individual posting-line derivations pass a sort order. That
//! asymmetry is deliberate and relied upon elsewhere.

use chrono::NaiveDate;

use crate::calculate::{CalculationState, end_of_previous_month, end_of_previous_year, start_of_month};
use crate::info::{BudgetInfo, CreditInfo, InfoCollection};
use crate::posting::PostingLineCollection;

use super::status::{
    AccountStatus, AccountValues, BudgetStatus, BudgetValues, ContactStatus, ContactValues,
};
use super::types::{Account, BudgetAccount, ContactAccount};

impl Account {
    /// Returns the account's snapshot as of `status_date`.
    ///
    /// Memoized: a second call with the same date returns the stored
    /// snapshot without touching the collections; any other date recomputes
    /// and replaces it.
    pub fn calculate(&mut self, status_date: NaiveDate) -> &AccountStatus {
        if self.calculated_at() != Some(status_date) {
            let snapshot = AccountStatus {
                values_at_status_date: account_values_as_of(
                    self.posting_lines(),
                    self.credit_infos(),
                    status_date,
                ),
                values_at_end_of_last_month: account_values_as_of(
                    self.posting_lines(),
                    self.credit_infos(),
                    end_of_previous_month(status_date),
                ),
                values_at_end_of_last_year: account_values_as_of(
                    self.posting_lines(),
                    self.credit_infos(),
                    end_of_previous_year(status_date),
                ),
            };
            *self.state_mut() = CalculationState::calculated(status_date, snapshot);
        }
        self.status().expect("snapshot stored above")
    }
}

impl BudgetAccount {
    /// Returns the budget account's snapshot as of `status_date`.
    ///
    /// Memoized like [`Account::calculate`]. The posted figure is
    /// month-scoped: it sums the month containing the as-of date, up to and
    /// including that date.
    pub fn calculate(&mut self, status_date: NaiveDate) -> &BudgetStatus {
        if self.calculated_at() != Some(status_date) {
            let snapshot = BudgetStatus {
                values_at_status_date: budget_values_as_of(
                    self.posting_lines(),
                    self.budget_infos(),
                    status_date,
                ),
                values_at_end_of_last_month: budget_values_as_of(
                    self.posting_lines(),
                    self.budget_infos(),
                    end_of_previous_month(status_date),
                ),
                values_at_end_of_last_year: budget_values_as_of(
                    self.posting_lines(),
                    self.budget_infos(),
                    end_of_previous_year(status_date),
                ),
            };
            *self.state_mut() = CalculationState::calculated(status_date, snapshot);
        }
        self.status().expect("snapshot stored above")
    }
}

impl ContactAccount {
    /// Returns the contact account's snapshot as of `status_date`.
    ///
    /// Memoized like [`Account::calculate`]. Contact accounts track balance
    /// only - no credit or budget figure exists for them.
    pub fn calculate(&mut self, status_date: NaiveDate) -> &ContactStatus {
        if self.calculated_at() != Some(status_date) {
            let snapshot = ContactStatus {
                values_at_status_date: contact_values_as_of(self.posting_lines(), status_date),
                values_at_end_of_last_month: contact_values_as_of(
                    self.posting_lines(),
                    end_of_previous_month(status_date),
                ),
                values_at_end_of_last_year: contact_values_as_of(
                    self.posting_lines(),
                    end_of_previous_year(status_date),
                ),
            };
            *self.state_mut() = CalculationState::calculated(status_date, snapshot);
        }
        self.status().expect("snapshot stored above")
    }
}

fn account_values_as_of(
    lines: &PostingLineCollection,
    infos: &InfoCollection<CreditInfo>,
    as_of: NaiveDate,
) -> AccountValues {
    let credit = infos.find(as_of).map(|info| info.credit).unwrap_or_default();
    let balance = lines.calculate_posting_value(NaiveDate::MIN, as_of, None);
    AccountValues::new(credit, balance)
}

fn budget_values_as_of(
    lines: &PostingLineCollection,
    infos: &InfoCollection<BudgetInfo>,
    as_of: NaiveDate,
) -> BudgetValues {
    let budget = infos.find(as_of).map(BudgetInfo::budget).unwrap_or_default();
    let posted = lines.calculate_posting_value(start_of_month(as_of), as_of, None);
    BudgetValues::new(budget, posted)
}

fn contact_values_as_of(lines: &PostingLineCollection, as_of: NaiveDate) -> ContactValues {
    ContactValues::new(lines.calculate_posting_value(NaiveDate::MIN, as_of, None))
}
