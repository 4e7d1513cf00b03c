//! Accounting-level calculation fan-out.

use std::collections::HashMap;

use chrono::NaiveDate;
use kontiva_shared::PostingLineId;
use rayon::prelude::*;
use tracing::debug;

use crate::account::{Account, BudgetAccount, ContactAccount};
use crate::calculate::CalculateError;
use crate::posting::PostingLine;

use super::types::Accounting;

impl Accounting {
    /// Calculates the whole accounting as of `status_date`.
    ///
    /// Memoized: a repeat call for the same date is a no-op. Otherwise every
    /// account-family entity computes its snapshot (siblings own disjoint
    /// collections, so the fan-out runs in parallel), then every posting
    /// line derives its date-scoped value sets from the snapshots.
    ///
    /// # Errors
    ///
    /// Propagates derivation precondition failures; with a graph built
    /// through the `add_*` methods these cannot occur.
    pub fn calculate(&mut self, status_date: NaiveDate) -> Result<(), CalculateError> {
        if self.calculated_at == Some(status_date) {
            return Ok(());
        }

        debug!(
            accounting = self.number,
            %status_date,
            accounts = self.accounts.len(),
            budget_accounts = self.budget_accounts.len(),
            contact_accounts = self.contact_accounts.len(),
            posting_lines = self.posting_lines.len(),
            "calculating accounting"
        );

        self.accounts.par_iter_mut().for_each(|account| {
            account.calculate(status_date);
        });
        self.budget_accounts.par_iter_mut().for_each(|account| {
            account.calculate(status_date);
        });
        self.contact_accounts.par_iter_mut().for_each(|account| {
            account.calculate(status_date);
        });

        let Self {
            accounts,
            budget_accounts,
            contact_accounts,
            posting_lines,
            account_index,
            budget_account_index,
            contact_account_index,
            ..
        } = self;
        for line in posting_lines.iter_mut() {
            derive_line(
                line,
                status_date,
                accounts,
                account_index,
                budget_accounts,
                budget_account_index,
                contact_accounts,
                contact_account_index,
            )?;
        }

        self.calculated_at = Some(status_date);
        Ok(())
    }

    /// Calculates a single posting line as of `status_date`.
    ///
    /// Calculating a line calculates its owning accounting first (memoized),
    /// which in turn guarantees the snapshots of every entity the line
    /// references; the line itself is then already derived.
    ///
    /// # Errors
    ///
    /// [`CalculateError::UnknownPostingLine`] if the id does not belong to
    /// this accounting.
    pub fn calculate_posting_line(
        &mut self,
        id: PostingLineId,
        status_date: NaiveDate,
    ) -> Result<&PostingLine, CalculateError> {
        let at = *self
            .line_index
            .get(&id)
            .ok_or(CalculateError::UnknownPostingLine(id))?;
        self.calculate(status_date)?;
        Ok(&self.posting_lines[at])
    }
}

#[allow(clippy::too_many_arguments)]
fn derive_line(
    line: &mut PostingLine,
    status_date: NaiveDate,
    accounts: &[Account],
    account_index: &HashMap<String, usize>,
    budget_accounts: &[BudgetAccount],
    budget_account_index: &HashMap<String, usize>,
    contact_accounts: &[ContactAccount],
    contact_account_index: &HashMap<String, usize>,
) -> Result<(), CalculateError> {
    if !line.begin_calculation(status_date) {
        return Ok(());
    }

    let account = account_index
        .get(line.account_number())
        .map(|&at| &accounts[at])
        .ok_or_else(|| CalculateError::UnknownAccount(line.account_number().to_owned()))?;
    line.apply_account_calculation(account)?;

    if let Some(number) = line.budget_account_number().map(str::to_owned) {
        let budget_account = budget_account_index
            .get(&number)
            .map(|&at| &budget_accounts[at])
            .ok_or_else(|| CalculateError::UnknownBudgetAccount(number.clone()))?;
        line.apply_budget_account_calculation(budget_account)?;
    }

    if let Some(number) = line.contact_account_number().map(str::to_owned) {
        let contact_account = contact_account_index
            .get(&number)
            .map(|&at| &contact_accounts[at])
            .ok_or_else(|| CalculateError::UnknownContactAccount(number.clone()))?;
        line.apply_contact_account_calculation(contact_account)?;
    }

    line.finish_calculation(status_date);
    Ok(())
}
