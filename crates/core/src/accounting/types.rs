//! The accounting aggregate: entity arena and graph construction.

use std::collections::HashMap;

use chrono::NaiveDate;
use kontiva_shared::PostingLineId;

use crate::account::{Account, BudgetAccount, ContactAccount};
use crate::calculate::CalculateError;
use crate::posting::PostingLine;

/// An accounting: the root aggregate owning every account-family entity and
/// every posting line.
///
/// Cross-references are account numbers and posting line ids, never owning
/// pointers, so the ownership graph is acyclic: the arena owns the lines,
/// each entity's collection carries lightweight copies of the fields the
/// summation primitive needs.
///
/// Graphs are populated once through the `add_*` methods (standing in for
/// the repository boundary) and calculated zero or more times afterwards.
#[derive(Debug, Clone)]
pub struct Accounting {
    pub(crate) number: i32,
    pub(crate) name: String,
    pub(crate) accounts: Vec<Account>,
    pub(crate) budget_accounts: Vec<BudgetAccount>,
    pub(crate) contact_accounts: Vec<ContactAccount>,
    pub(crate) posting_lines: Vec<PostingLine>,
    pub(crate) account_index: HashMap<String, usize>,
    pub(crate) budget_account_index: HashMap<String, usize>,
    pub(crate) contact_account_index: HashMap<String, usize>,
    pub(crate) line_index: HashMap<PostingLineId, usize>,
    pub(crate) calculated_at: Option<NaiveDate>,
}

impl Accounting {
    /// Creates an empty accounting.
    #[must_use]
    pub fn new(number: i32, name: impl Into<String>) -> Self {
        Self {
            number,
            name: name.into(),
            accounts: Vec::new(),
            budget_accounts: Vec::new(),
            contact_accounts: Vec::new(),
            posting_lines: Vec::new(),
            account_index: HashMap::new(),
            budget_account_index: HashMap::new(),
            contact_account_index: HashMap::new(),
            line_index: HashMap::new(),
            calculated_at: None,
        }
    }

    /// Accounting number.
    #[must_use]
    pub fn number(&self) -> i32 {
        self.number
    }

    /// Accounting name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Status date of the last completed calculation, if any.
    #[must_use]
    pub fn calculated_at(&self) -> Option<NaiveDate> {
        self.calculated_at
    }

    /// Adds an account.
    ///
    /// # Errors
    ///
    /// [`CalculateError::DuplicateAccount`] if the number is already taken.
    pub fn add_account(&mut self, account: Account) -> Result<(), CalculateError> {
        if self.account_index.contains_key(account.number()) {
            return Err(CalculateError::DuplicateAccount(account.number().to_owned()));
        }
        self.account_index
            .insert(account.number().to_owned(), self.accounts.len());
        self.accounts.push(account);
        Ok(())
    }

    /// Adds a budget account.
    ///
    /// # Errors
    ///
    /// [`CalculateError::DuplicateAccount`] if the number is already taken.
    pub fn add_budget_account(&mut self, account: BudgetAccount) -> Result<(), CalculateError> {
        if self.budget_account_index.contains_key(account.number()) {
            return Err(CalculateError::DuplicateAccount(account.number().to_owned()));
        }
        self.budget_account_index
            .insert(account.number().to_owned(), self.budget_accounts.len());
        self.budget_accounts.push(account);
        Ok(())
    }

    /// Adds a contact account.
    ///
    /// # Errors
    ///
    /// [`CalculateError::DuplicateAccount`] if the number is already taken.
    pub fn add_contact_account(&mut self, account: ContactAccount) -> Result<(), CalculateError> {
        if self.contact_account_index.contains_key(account.number()) {
            return Err(CalculateError::DuplicateAccount(account.number().to_owned()));
        }
        self.contact_account_index
            .insert(account.number().to_owned(), self.contact_accounts.len());
        self.contact_accounts.push(account);
        Ok(())
    }

    /// Adds a posting line to the arena, registering its summation entry
    /// with the referenced account and, where present, budget and contact
    /// accounts.
    ///
    /// # Errors
    ///
    /// [`CalculateError::DuplicatePostingLine`] for a reused id;
    /// [`CalculateError::UnknownAccount`],
    /// [`CalculateError::UnknownBudgetAccount`], or
    /// [`CalculateError::UnknownContactAccount`] when a referenced number
    /// has not been added.
    pub fn add_posting_line(&mut self, line: PostingLine) -> Result<(), CalculateError> {
        if self.line_index.contains_key(&line.id()) {
            return Err(CalculateError::DuplicatePostingLine(line.id()));
        }

        let account_at = *self
            .account_index
            .get(line.account_number())
            .ok_or_else(|| CalculateError::UnknownAccount(line.account_number().to_owned()))?;
        let budget_at = line
            .budget_account_number()
            .map(|number| {
                self.budget_account_index
                    .get(number)
                    .copied()
                    .ok_or_else(|| CalculateError::UnknownBudgetAccount(number.to_owned()))
            })
            .transpose()?;
        let contact_at = line
            .contact_account_number()
            .map(|number| {
                self.contact_account_index
                    .get(number)
                    .copied()
                    .ok_or_else(|| CalculateError::UnknownContactAccount(number.to_owned()))
            })
            .transpose()?;

        let entry = line.entry();
        self.accounts[account_at].register_posting(entry);
        if let Some(at) = budget_at {
            self.budget_accounts[at].register_posting(entry);
        }
        if let Some(at) = contact_at {
            self.contact_accounts[at].register_posting(entry);
        }

        self.line_index.insert(line.id(), self.posting_lines.len());
        self.posting_lines.push(line);
        Ok(())
    }

    /// Looks up an account by number.
    #[must_use]
    pub fn account(&self, number: &str) -> Option<&Account> {
        self.account_index
            .get(number)
            .map(|&at| &self.accounts[at])
    }

    /// Looks up a budget account by number.
    #[must_use]
    pub fn budget_account(&self, number: &str) -> Option<&BudgetAccount> {
        self.budget_account_index
            .get(number)
            .map(|&at| &self.budget_accounts[at])
    }

    /// Looks up a contact account by number.
    #[must_use]
    pub fn contact_account(&self, number: &str) -> Option<&ContactAccount> {
        self.contact_account_index
            .get(number)
            .map(|&at| &self.contact_accounts[at])
    }

    /// Looks up a posting line by id.
    #[must_use]
    pub fn posting_line(&self, id: PostingLineId) -> Option<&PostingLine> {
        self.line_index.get(&id).map(|&at| &self.posting_lines[at])
    }

    /// All accounts, in insertion order.
    #[must_use]
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// All budget accounts, in insertion order.
    #[must_use]
    pub fn budget_accounts(&self) -> &[BudgetAccount] {
        &self.budget_accounts
    }

    /// All contact accounts, in insertion order.
    #[must_use]
    pub fn contact_accounts(&self) -> &[ContactAccount] {
        &self.contact_accounts
    }

    /// All posting lines, in insertion order.
    #[must_use]
    pub fn posting_lines(&self) -> &[PostingLine] {
        &self.posting_lines
    }
}
