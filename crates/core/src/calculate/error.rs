//! Calculation error types.

use kontiva_shared::PostingLineId;
use thiserror::Error;

/// Errors raised by graph construction and calculation preconditions.
///
/// Missing monthly info entries and empty posting-line windows are *not*
/// errors; they contribute zero figures by contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculateError {
    /// A posting line references an account number the accounting does not contain.
    #[error("Account not found in accounting: {0}")]
    UnknownAccount(String),

    /// A posting line references a budget account number the accounting does not contain.
    #[error("Budget account not found in accounting: {0}")]
    UnknownBudgetAccount(String),

    /// A posting line references a contact account number the accounting does not contain.
    #[error("Contact account not found in accounting: {0}")]
    UnknownContactAccount(String),

    /// The requested posting line does not belong to this accounting.
    #[error("Posting line not found in accounting: {0}")]
    UnknownPostingLine(PostingLineId),

    /// An account-family entity with this number was already added.
    #[error("Duplicate account number: {0}")]
    DuplicateAccount(String),

    /// A posting line with this id was already added.
    #[error("Duplicate posting line id: {0}")]
    DuplicatePostingLine(PostingLineId),

    /// A derivation was attempted against an entity with no calculated snapshot.
    #[error("Entity has not been calculated: {0}")]
    NotCalculated(String),

    /// A derivation was attempted against the wrong entity.
    #[error("Posting line references account '{expected}', got calculated account '{got}'")]
    AccountMismatch {
        /// Account number the posting line references.
        expected: String,
        /// Number of the entity actually passed.
        got: String,
    },
}
