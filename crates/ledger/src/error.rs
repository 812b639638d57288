//! Ledger errors

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur when mutating an account
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),

    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    #[error("Balance overflow")]
    BalanceOverflow,
}
