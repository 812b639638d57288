//! Bank errors

use corebank_core::AmountError;
use corebank_ledger::{AccountNumber, LedgerError};
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors surfaced by bank operations.
///
/// Everything here is a recoverable, caller-visible outcome; nothing is
/// fatal to the process. Authentication failures are deliberately not an
/// error variant: `Bank::authenticate` returns `Option` so that a bad
/// number and a bad PIN are indistinguishable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BankError {
    #[error("Holder must be at least {minimum} years old, got {age}")]
    HolderTooYoung { age: u32, minimum: u32 },

    #[error("Declared salary {salary} is below the minimum {minimum}")]
    SalaryBelowMinimum { salary: Decimal, minimum: Decimal },

    #[error("No account with number {0}")]
    UnknownAccount(AccountNumber),

    #[error(transparent)]
    Amount(#[from] AmountError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
