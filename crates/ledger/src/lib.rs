//! Corebank Ledger - Customer account state
//!
//! All customer balance state lives in this crate. A mutation either
//! satisfies every invariant (positive amount, sufficient funds) and
//! appends to the history, or it is refused with no state change.
//!
//! # Key Types
//! - `AccountNumber`: Bank-assigned identifier, unique and never reused
//! - `Transaction`: Immutable balance-affecting event with a timestamp
//! - `Account`: Balance plus append-only history and credential token

pub mod account;
pub mod error;
pub mod transaction;

pub use account::{Account, AccountNumber, AccountSummary};
pub use error::LedgerError;
pub use transaction::{Transaction, TxKind};
