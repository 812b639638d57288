//! Corebank Bank - The owning collection of accounts
//!
//! The `Bank` assigns account numbers, resolves credentials, routes
//! deposits and withdrawals to the owned accounts, and runs the anomaly
//! detector after every operation that warrants it. Detector output is
//! advisory: a flagged operation still applies, and its alerts ride
//! along on the receipt for the caller to surface.

pub mod bank;
pub mod error;

pub use bank::{Bank, Receipt};
pub use error::BankError;
