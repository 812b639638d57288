//! Customer accounts
//!
//! An `Account` owns its balance and transaction history exclusively.
//! The only mutations are `deposit` and `withdraw`; both either apply
//! fully (balance change + appended transaction) or refuse with no
//! state change.

use chrono::{DateTime, Utc};
use corebank_core::{Amount, PinHash};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::LedgerError;
use crate::transaction::{Transaction, TxKind};

/// Bank-assigned account identifier.
///
/// Numbers are unique for the life of the process, strictly increasing in
/// assignment order, and never reused.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AccountNumber(pub u32);

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for AccountNumber {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// A customer account: holder profile, credential token, balance, and
/// append-only transaction history.
///
/// # Invariants
/// - `balance` equals the initial balance plus all deposits minus all
///   applied withdrawals, and is never negative.
/// - The history only grows, in chronological order.
/// - The credential token is set at construction and verified only
///   through [`verify_pin`](Account::verify_pin).
#[derive(Debug, Clone)]
pub struct Account {
    number: AccountNumber,
    name: String,
    age: u32,
    salary: Decimal,
    pin: PinHash,
    balance: Amount,
    transactions: Vec<Transaction>,
}

impl Account {
    /// Construct an account.
    ///
    /// Holder preconditions (minimum age, minimum salary) are the
    /// responsibility of the bank that assigns the number, not of this
    /// constructor.
    pub fn new(
        number: AccountNumber,
        name: impl Into<String>,
        age: u32,
        salary: Decimal,
        pin: PinHash,
        initial_balance: Amount,
    ) -> Self {
        Self {
            number,
            name: name.into(),
            age,
            salary,
            pin,
            balance: initial_balance,
            transactions: Vec::new(),
        }
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn salary(&self) -> Decimal {
        self.salary
    }

    /// Current balance
    pub fn balance(&self) -> Decimal {
        self.balance.value()
    }

    /// Full history, oldest first
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Restartable iteration over the history in chronological order
    pub fn history(&self) -> impl Iterator<Item = &Transaction> + '_ {
        self.transactions.iter()
    }

    /// Verify a PIN against the stored credential token
    pub fn verify_pin(&self, pin: i64) -> bool {
        self.pin.verify(pin)
    }

    /// Credit the balance and append a Deposit stamped `at`.
    ///
    /// Refuses a zero amount; negative amounts are unrepresentable in
    /// [`Amount`].
    pub fn deposit(&mut self, amount: Amount, at: DateTime<Utc>) -> Result<(), LedgerError> {
        if amount.is_zero() {
            return Err(LedgerError::NonPositiveAmount(amount.value()));
        }
        self.balance = self
            .balance
            .checked_add(&amount)
            .ok_or(LedgerError::BalanceOverflow)?;
        self.transactions
            .push(Transaction::new(TxKind::Deposit, amount, at));
        Ok(())
    }

    /// Debit the balance and append a Withdraw stamped `at`.
    ///
    /// Refuses a zero amount, and refuses any amount exceeding the
    /// current balance with no state change.
    pub fn withdraw(&mut self, amount: Amount, at: DateTime<Utc>) -> Result<(), LedgerError> {
        if amount.is_zero() {
            return Err(LedgerError::NonPositiveAmount(amount.value()));
        }
        self.balance =
            self.balance
                .checked_sub(&amount)
                .ok_or(LedgerError::InsufficientFunds {
                    requested: amount.value(),
                    available: self.balance.value(),
                })?;
        self.transactions
            .push(Transaction::new(TxKind::Withdraw, amount, at));
        Ok(())
    }

    /// Serializable snapshot for administrative listings.
    ///
    /// Deliberately excludes the credential token.
    pub fn summary(&self) -> AccountSummary {
        AccountSummary {
            number: self.number,
            name: self.name.clone(),
            age: self.age,
            salary: self.salary,
            balance: self.balance.value(),
            transaction_count: self.transactions.len(),
        }
    }
}

/// Point-in-time account snapshot without the credential token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub number: AccountNumber,
    pub name: String,
    pub age: u32,
    pub salary: Decimal,
    pub balance: Decimal,
    pub transaction_count: usize,
}
