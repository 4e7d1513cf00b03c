//! Posting lines: immutable ledger entries plus calculation-derived state.

use chrono::NaiveDate;
use kontiva_shared::PostingLineId;
use rust_decimal::Decimal;

use crate::account::{
    Account, AccountValues, BudgetAccount, BudgetValues, ContactAccount, ContactValues,
};
use crate::calculate::{CalculateError, start_of_month};

use super::collection::PostingEntry;

/// One immutable ledger entry.
///
/// The posting itself (date, amounts, account references, sort order) never
/// changes after construction; the `*_values_at_posting_date` fields and the
/// status date are derived state owned by the calculation engine.
#[derive(Debug, Clone)]
pub struct PostingLine {
    id: PostingLineId,
    posting_date: NaiveDate,
    reference: Option<String>,
    details: String,
    account_number: String,
    budget_account_number: Option<String>,
    contact_account_number: Option<String>,
    debit: Decimal,
    credit: Decimal,
    sort_order: i32,
    account_values: Option<AccountValues>,
    budget_account_values: Option<BudgetValues>,
    contact_account_values: Option<ContactValues>,
    status_date: Option<NaiveDate>,
}

impl PostingLine {
    /// Creates a posting line against an account.
    ///
    /// Debit and credit must both be ≥ 0; validation of business rules is a
    /// boundary concern, so only the sign invariant is asserted here.
    #[must_use]
    pub fn new(
        id: PostingLineId,
        posting_date: NaiveDate,
        details: impl Into<String>,
        account_number: impl Into<String>,
        debit: Decimal,
        credit: Decimal,
        sort_order: i32,
    ) -> Self {
        debug_assert!(debit >= Decimal::ZERO, "debit must be non-negative");
        debug_assert!(credit >= Decimal::ZERO, "credit must be non-negative");
        Self {
            id,
            posting_date,
            reference: None,
            details: details.into(),
            account_number: account_number.into(),
            budget_account_number: None,
            contact_account_number: None,
            debit,
            credit,
            sort_order,
            account_values: None,
            budget_account_values: None,
            contact_account_values: None,
            status_date: None,
        }
    }

    /// Sets the reference text (e.g., an invoice number).
    #[must_use]
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    /// Cross-references a budget account.
    #[must_use]
    pub fn with_budget_account(mut self, number: impl Into<String>) -> Self {
        self.budget_account_number = Some(number.into());
        self
    }

    /// Cross-references a contact account.
    #[must_use]
    pub fn with_contact_account(mut self, number: impl Into<String>) -> Self {
        self.contact_account_number = Some(number.into());
        self
    }

    /// Pre-supplies account values (e.g., restored from a cache).
    ///
    /// A line constructed this way keeps the supplied values through its
    /// first calculation - the derivation step that reads the account's
    /// collections is skipped entirely. A later calculation for a different
    /// status date discards and re-derives them.
    #[must_use]
    pub fn with_account_values(mut self, values: AccountValues) -> Self {
        self.account_values = Some(values);
        self
    }

    /// Unique id.
    #[must_use]
    pub fn id(&self) -> PostingLineId {
        self.id
    }

    /// Posting date (date-only).
    #[must_use]
    pub fn posting_date(&self) -> NaiveDate {
        self.posting_date
    }

    /// Reference text, if any.
    #[must_use]
    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    /// Details text.
    #[must_use]
    pub fn details(&self) -> &str {
        &self.details
    }

    /// Number of the owning account.
    #[must_use]
    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    /// Number of the cross-referenced budget account, if any.
    #[must_use]
    pub fn budget_account_number(&self) -> Option<&str> {
        self.budget_account_number.as_deref()
    }

    /// Number of the cross-referenced contact account, if any.
    #[must_use]
    pub fn contact_account_number(&self) -> Option<&str> {
        self.contact_account_number.as_deref()
    }

    /// Debit amount (≥ 0).
    #[must_use]
    pub fn debit(&self) -> Decimal {
        self.debit
    }

    /// Credit amount (≥ 0).
    #[must_use]
    pub fn credit(&self) -> Decimal {
        self.credit
    }

    /// Same-date tie-break order.
    #[must_use]
    pub fn sort_order(&self) -> i32 {
        self.sort_order
    }

    /// Posting value: debit − credit.
    #[must_use]
    pub fn posting_value(&self) -> Decimal {
        self.debit - self.credit
    }

    /// Status date of the last completed calculation, if any.
    #[must_use]
    pub fn status_date(&self) -> Option<NaiveDate> {
        self.status_date
    }

    /// Account values as of this line's posting date, once derived.
    #[must_use]
    pub fn account_values_at_posting_date(&self) -> Option<&AccountValues> {
        self.account_values.as_ref()
    }

    /// Budget account values as of this line's posting date, once derived.
    ///
    /// Always `None` for lines without a budget account.
    #[must_use]
    pub fn budget_account_values_at_posting_date(&self) -> Option<&BudgetValues> {
        self.budget_account_values.as_ref()
    }

    /// Contact account values as of this line's posting date, once derived.
    ///
    /// Always `None` for lines without a contact account.
    #[must_use]
    pub fn contact_account_values_at_posting_date(&self) -> Option<&ContactValues> {
        self.contact_account_values.as_ref()
    }

    /// The aggregation-relevant slice of this line, for collection registration.
    #[must_use]
    pub fn entry(&self) -> PostingEntry {
        PostingEntry::new(
            self.id,
            self.posting_date,
            self.sort_order,
            self.posting_value(),
        )
    }

    /// Starts a calculation pass for `status_date`.
    ///
    /// Returns `false` on a memo hit (already calculated for exactly this
    /// date - the pass is a no-op). Otherwise clears derived state left by a
    /// previous pass for another date and returns `true`. Values supplied at
    /// construction survive until the first pass completes; after that every
    /// new date re-derives from scratch.
    pub(crate) fn begin_calculation(&mut self, status_date: NaiveDate) -> bool {
        match self.status_date {
            Some(date) if date == status_date => false,
            Some(_) => {
                self.account_values = None;
                self.budget_account_values = None;
                self.contact_account_values = None;
                self.status_date = None;
                true
            }
            None => true,
        }
    }

    /// Completes a calculation pass, recording its status date.
    pub(crate) fn finish_calculation(&mut self, status_date: NaiveDate) {
        self.status_date = Some(status_date);
    }

    /// Derives account values as of this line's posting date from an
    /// already-calculated account.
    ///
    /// If the values are already present (pre-supplied at construction, or
    /// derived earlier in this pass) they are kept as-is and the account's
    /// collections are not read. The balance window is lifetime-scoped
    /// (`[MIN, posting_date]`) with this line's own sort order as the
    /// same-day tie-break - the only place an individual-line tie-break is
    /// used.
    ///
    /// # Errors
    ///
    /// [`CalculateError::NotCalculated`] if the account has no snapshot;
    /// [`CalculateError::AccountMismatch`] if it is not this line's account.
    pub fn apply_account_calculation(
        &mut self,
        calculated_account: &Account,
    ) -> Result<&mut Self, CalculateError> {
        if calculated_account.calculated_at().is_none() {
            return Err(CalculateError::NotCalculated(
                calculated_account.number().to_owned(),
            ));
        }
        if calculated_account.number() != self.account_number {
            return Err(CalculateError::AccountMismatch {
                expected: self.account_number.clone(),
                got: calculated_account.number().to_owned(),
            });
        }
        if self.account_values.is_none() {
            let credit = calculated_account
                .credit_infos()
                .find(self.posting_date)
                .map(|info| info.credit)
                .unwrap_or_default();
            let balance = calculated_account.posting_lines().calculate_posting_value(
                NaiveDate::MIN,
                self.posting_date,
                Some(self.sort_order),
            );
            self.account_values = Some(AccountValues::new(credit, balance));
        }
        Ok(self)
    }

    /// Derives budget account values as of this line's posting date from an
    /// already-calculated budget account.
    ///
    /// The posted window is month-scoped: `[first of posting month,
    /// posting_date]` with this line's sort order as tie-break.
    ///
    /// # Errors
    ///
    /// [`CalculateError::NotCalculated`] if the budget account has no
    /// snapshot; [`CalculateError::AccountMismatch`] if it is not the budget
    /// account this line references.
    pub fn apply_budget_account_calculation(
        &mut self,
        calculated_budget_account: &BudgetAccount,
    ) -> Result<&mut Self, CalculateError> {
        if calculated_budget_account.calculated_at().is_none() {
            return Err(CalculateError::NotCalculated(
                calculated_budget_account.number().to_owned(),
            ));
        }
        if self.budget_account_number.as_deref() != Some(calculated_budget_account.number()) {
            return Err(CalculateError::AccountMismatch {
                expected: self.budget_account_number.clone().unwrap_or_default(),
                got: calculated_budget_account.number().to_owned(),
            });
        }
        if self.budget_account_values.is_none() {
            let budget = calculated_budget_account
                .budget_infos()
                .find(self.posting_date)
                .map(crate::info::BudgetInfo::budget)
                .unwrap_or_default();
            let posted = calculated_budget_account
                .posting_lines()
                .calculate_posting_value(
                    start_of_month(self.posting_date),
                    self.posting_date,
                    Some(self.sort_order),
                );
            self.budget_account_values = Some(BudgetValues::new(budget, posted));
        }
        Ok(self)
    }

    /// Derives contact account values as of this line's posting date from an
    /// already-calculated contact account.
    ///
    /// Lifetime-scoped window with this line's sort order as tie-break;
    /// contact accounts produce a balance only.
    ///
    /// # Errors
    ///
    /// [`CalculateError::NotCalculated`] if the contact account has no
    /// snapshot; [`CalculateError::AccountMismatch`] if it is not the
    /// contact account this line references.
    pub fn apply_contact_account_calculation(
        &mut self,
        calculated_contact_account: &ContactAccount,
    ) -> Result<&mut Self, CalculateError> {
        if calculated_contact_account.calculated_at().is_none() {
            return Err(CalculateError::NotCalculated(
                calculated_contact_account.number().to_owned(),
            ));
        }
        if self.contact_account_number.as_deref() != Some(calculated_contact_account.number()) {
            return Err(CalculateError::AccountMismatch {
                expected: self.contact_account_number.clone().unwrap_or_default(),
                got: calculated_contact_account.number().to_owned(),
            });
        }
        if self.contact_account_values.is_none() {
            let balance = calculated_contact_account
                .posting_lines()
                .calculate_posting_value(
                    NaiveDate::MIN,
                    self.posting_date,
                    Some(self.sort_order),
                );
            self.contact_account_values = Some(ContactValues::new(balance));
        }
        Ok(self)
    }
}
