//! Account-family entity types.
//!
//! The three aggregation targets are structurally parallel: each owns a
//! posting line collection, a monthly info collection, and a memoized
//! calculated snapshot keyed by status date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculate::CalculationState;
use crate::info::{BudgetInfo, ContactInfo, CreditInfo, InfoCollection};
use crate::posting::{PostingEntry, PostingLineCollection};

use super::status::{AccountStatus, BudgetStatus, ContactStatus};

/// Classification of an account group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountGroupType {
    /// Asset accounts.
    Assets,
    /// Liability accounts.
    Liabilities,
}

/// Reporting group an account belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountGroup {
    /// Group number.
    pub number: i32,
    /// Group name.
    pub name: String,
    /// Asset/liability classification.
    pub group_type: AccountGroupType,
}

impl AccountGroup {
    /// Creates an account group.
    #[must_use]
    pub fn new(number: i32, name: impl Into<String>, group_type: AccountGroupType) -> Self {
        Self {
            number,
            name: name.into(),
            group_type,
        }
    }
}

/// Reporting group a budget account belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetAccountGroup {
    /// Group number.
    pub number: i32,
    /// Group name.
    pub name: String,
}

impl BudgetAccountGroup {
    /// Creates a budget account group.
    #[must_use]
    pub fn new(number: i32, name: impl Into<String>) -> Self {
        Self {
            number,
            name: name.into(),
        }
    }
}

/// An asset/liability account with a ledger and monthly credit limits.
#[derive(Debug, Clone)]
pub struct Account {
    number: String,
    name: String,
    group: AccountGroup,
    posting_lines: PostingLineCollection,
    credit_infos: InfoCollection<CreditInfo>,
    state: CalculationState<AccountStatus>,
}

impl Account {
    /// Creates an account with an empty ledger.
    #[must_use]
    pub fn new(number: impl Into<String>, name: impl Into<String>, group: AccountGroup) -> Self {
        Self {
            number: number.into(),
            name: name.into(),
            group,
            posting_lines: PostingLineCollection::new(),
            credit_infos: InfoCollection::new(),
            state: CalculationState::uncalculated(),
        }
    }

    /// Account number.
    #[must_use]
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Account name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reporting group.
    #[must_use]
    pub fn group(&self) -> &AccountGroup {
        &self.group
    }

    /// The account's posting line collection.
    #[must_use]
    pub fn posting_lines(&self) -> &PostingLineCollection {
        &self.posting_lines
    }

    /// The account's monthly credit info collection.
    #[must_use]
    pub fn credit_infos(&self) -> &InfoCollection<CreditInfo> {
        &self.credit_infos
    }

    /// Adds a monthly credit info entry (repository boundary).
    pub fn add_credit_info(&mut self, info: CreditInfo) {
        self.credit_infos.insert(info);
    }

    /// Registers a posting entry belonging to this account.
    pub(crate) fn register_posting(&mut self, entry: PostingEntry) {
        self.posting_lines.insert(entry);
    }

    /// The calculated snapshot, if any (regardless of its date).
    #[must_use]
    pub fn status(&self) -> Option<&AccountStatus> {
        self.state.snapshot()
    }

    /// The status date of the calculated snapshot, if any.
    #[must_use]
    pub fn calculated_at(&self) -> Option<NaiveDate> {
        self.state.status_date()
    }

    pub(crate) fn state_mut(&mut self) -> &mut CalculationState<AccountStatus> {
        &mut self.state
    }
}

/// A budget account with a ledger and monthly budget figures.
#[derive(Debug, Clone)]
pub struct BudgetAccount {
    number: String,
    name: String,
    group: BudgetAccountGroup,
    posting_lines: PostingLineCollection,
    budget_infos: InfoCollection<BudgetInfo>,
    state: CalculationState<BudgetStatus>,
}

impl BudgetAccount {
    /// Creates a budget account with an empty ledger.
    #[must_use]
    pub fn new(
        number: impl Into<String>,
        name: impl Into<String>,
        group: BudgetAccountGroup,
    ) -> Self {
        Self {
            number: number.into(),
            name: name.into(),
            group,
            posting_lines: PostingLineCollection::new(),
            budget_infos: InfoCollection::new(),
            state: CalculationState::uncalculated(),
        }
    }

    /// Account number.
    #[must_use]
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Account name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reporting group.
    #[must_use]
    pub fn group(&self) -> &BudgetAccountGroup {
        &self.group
    }

    /// The account's posting line collection.
    #[must_use]
    pub fn posting_lines(&self) -> &PostingLineCollection {
        &self.posting_lines
    }

    /// The account's monthly budget info collection.
    #[must_use]
    pub fn budget_infos(&self) -> &InfoCollection<BudgetInfo> {
        &self.budget_infos
    }

    /// Adds a monthly budget info entry (repository boundary).
    pub fn add_budget_info(&mut self, info: BudgetInfo) {
        self.budget_infos.insert(info);
    }

    /// Registers a posting entry belonging to this budget account.
    pub(crate) fn register_posting(&mut self, entry: PostingEntry) {
        self.posting_lines.insert(entry);
    }

    /// The calculated snapshot, if any (regardless of its date).
    #[must_use]
    pub fn status(&self) -> Option<&BudgetStatus> {
        self.state.snapshot()
    }

    /// The status date of the calculated snapshot, if any.
    #[must_use]
    pub fn calculated_at(&self) -> Option<NaiveDate> {
        self.state.status_date()
    }

    pub(crate) fn state_mut(&mut self) -> &mut CalculationState<BudgetStatus> {
        &mut self.state
    }
}

/// A contact (debtor/creditor) account with a ledger and recorded monthly balances.
#[derive(Debug, Clone)]
pub struct ContactAccount {
    number: String,
    name: String,
    posting_lines: PostingLineCollection,
    contact_infos: InfoCollection<ContactInfo>,
    state: CalculationState<ContactStatus>,
}

impl ContactAccount {
    /// Creates a contact account with an empty ledger.
    #[must_use]
    pub fn new(number: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            name: name.into(),
            posting_lines: PostingLineCollection::new(),
            contact_infos: InfoCollection::new(),
            state: CalculationState::uncalculated(),
        }
    }

    /// Account number.
    #[must_use]
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Contact name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The account's posting line collection.
    #[must_use]
    pub fn posting_lines(&self) -> &PostingLineCollection {
        &self.posting_lines
    }

    /// The account's recorded monthly balance collection.
    #[must_use]
    pub fn contact_infos(&self) -> &InfoCollection<ContactInfo> {
        &self.contact_infos
    }

    /// Adds a recorded monthly balance entry (repository boundary).
    pub fn add_contact_info(&mut self, info: ContactInfo) {
        self.contact_infos.insert(info);
    }

    /// Registers a posting entry belonging to this contact account.
    pub(crate) fn register_posting(&mut self, entry: PostingEntry) {
        self.posting_lines.insert(entry);
    }

    /// The calculated snapshot, if any (regardless of its date).
    #[must_use]
    pub fn status(&self) -> Option<&ContactStatus> {
        self.state.snapshot()
    }

    /// The status date of the calculated snapshot, if any.
    #[must_use]
    pub fn calculated_at(&self) -> Option<NaiveDate> {
        self.state.status_date()
    }

    pub(crate) fn state_mut(&mut self) -> &mut CalculationState<ContactStatus> {
        &mut self.state
    }
}
