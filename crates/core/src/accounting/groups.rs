//! Reporting views over an already-calculated accounting.
//!
//! Grouping helpers consume the memoized entity snapshots; they never
//! trigger calculation themselves.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::account::{
    AccountGroup, AccountValues, BudgetAccountGroup, BudgetValues, ContactAccount, ContactRole,
};
use crate::calculate::CalculateError;

use super::types::Accounting;

/// Summed account values for one account group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountGroupStatus {
    /// The group.
    pub group: AccountGroup,
    /// Summed values as of the status date.
    pub values_at_status_date: AccountValues,
    /// Summed values as of the end of the previous month.
    pub values_at_end_of_last_month: AccountValues,
    /// Summed values as of the end of the previous year.
    pub values_at_end_of_last_year: AccountValues,
}

impl AccountGroupStatus {
    fn empty(group: AccountGroup) -> Self {
        Self {
            group,
            values_at_status_date: AccountValues::default(),
            values_at_end_of_last_month: AccountValues::default(),
            values_at_end_of_last_year: AccountValues::default(),
        }
    }
}

/// Summed budget values for one budget account group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetAccountGroupStatus {
    /// The group.
    pub group: BudgetAccountGroup,
    /// Summed values as of the status date.
    pub values_at_status_date: BudgetValues,
    /// Summed values as of the end of the previous month.
    pub values_at_end_of_last_month: BudgetValues,
    /// Summed values as of the end of the previous year.
    pub values_at_end_of_last_year: BudgetValues,
}

impl BudgetAccountGroupStatus {
    fn empty(group: BudgetAccountGroup) -> Self {
        Self {
            group,
            values_at_status_date: BudgetValues::default(),
            values_at_end_of_last_month: BudgetValues::default(),
            values_at_end_of_last_year: BudgetValues::default(),
        }
    }
}

impl Accounting {
    /// Sums calculated account snapshots per account group, ordered by
    /// group number.
    ///
    /// # Errors
    ///
    /// [`CalculateError::NotCalculated`] if the accounting has not been
    /// calculated.
    pub fn account_group_statuses(&self) -> Result<Vec<AccountGroupStatus>, CalculateError> {
        if self.calculated_at.is_none() {
            return Err(CalculateError::NotCalculated(self.number.to_string()));
        }

        let mut by_group: BTreeMap<i32, AccountGroupStatus> = BTreeMap::new();
        for account in &self.accounts {
            let Some(status) = account.status() else {
                continue;
            };
            let totals = by_group
                .entry(account.group().number)
                .or_insert_with(|| AccountGroupStatus::empty(account.group().clone()));
            totals.values_at_status_date += status.values_at_status_date;
            totals.values_at_end_of_last_month += status.values_at_end_of_last_month;
            totals.values_at_end_of_last_year += status.values_at_end_of_last_year;
        }
        Ok(by_group.into_values().collect())
    }

    /// Sums calculated budget account snapshots per budget account group,
    /// ordered by group number.
    ///
    /// # Errors
    ///
    /// [`CalculateError::NotCalculated`] if the accounting has not been
    /// calculated.
    pub fn budget_account_group_statuses(
        &self,
    ) -> Result<Vec<BudgetAccountGroupStatus>, CalculateError> {
        if self.calculated_at.is_none() {
            return Err(CalculateError::NotCalculated(self.number.to_string()));
        }

        let mut by_group: BTreeMap<i32, BudgetAccountGroupStatus> = BTreeMap::new();
        for account in &self.budget_accounts {
            let Some(status) = account.status() else {
                continue;
            };
            let totals = by_group
                .entry(account.group().number)
                .or_insert_with(|| BudgetAccountGroupStatus::empty(account.group().clone()));
            totals.values_at_status_date += status.values_at_status_date;
            totals.values_at_end_of_last_month += status.values_at_end_of_last_month;
            totals.values_at_end_of_last_year += status.values_at_end_of_last_year;
        }
        Ok(by_group.into_values().collect())
    }

    /// Contact accounts with a positive calculated balance.
    ///
    /// # Errors
    ///
    /// [`CalculateError::NotCalculated`] if the accounting has not been
    /// calculated.
    pub fn debtors(&self) -> Result<Vec<&ContactAccount>, CalculateError> {
        self.contacts_with_role(ContactRole::Debtor)
    }

    /// Contact accounts with a negative calculated balance.
    ///
    /// # Errors
    ///
    /// [`CalculateError::NotCalculated`] if the accounting has not been
    /// calculated.
    pub fn creditors(&self) -> Result<Vec<&ContactAccount>, CalculateError> {
        self.contacts_with_role(ContactRole::Creditor)
    }

    fn contacts_with_role(
        &self,
        role: ContactRole,
    ) -> Result<Vec<&ContactAccount>, CalculateError> {
        if self.calculated_at.is_none() {
            return Err(CalculateError::NotCalculated(self.number.to_string()));
        }
        Ok(self
            .contact_accounts
            .iter()
            .filter(|contact| {
                contact
                    .status()
                    .is_some_and(|status| status.values_at_status_date.role() == role)
            })
            .collect())
    }
}
