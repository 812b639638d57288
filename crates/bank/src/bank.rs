//! The bank: account collection, number assignment, credential
//! resolution, and detector orchestration

use std::collections::BTreeMap;

use chrono::Utc;
use corebank_aml::{AmlAlert, AmlDetector};
use corebank_core::{Amount, PinHash};
use corebank_ledger::{Account, AccountNumber, AccountSummary, Transaction};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::BankError;

/// First account number handed out
const FIRST_ACCOUNT_NUMBER: u32 = 1001;

/// Minimum holder age at account opening
const MINIMUM_AGE: u32 = 18;

/// Outcome of a successful operation: the post-state balance plus any
/// advisory signals the detector raised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub account: AccountNumber,
    pub balance: Decimal,
    pub alerts: Vec<AmlAlert>,
}

/// The owning collection of all accounts.
///
/// # Invariants
/// - Account numbers are unique and strictly increasing in assignment
///   order, starting at 1001; a refused creation consumes no number.
/// - Accounts are owned exclusively by the bank and live for the whole
///   session; there is no delete or close operation.
pub struct Bank {
    // BTreeMap keyed by an increasing number: iteration order is both
    // ascending-number and insertion order
    accounts: BTreeMap<AccountNumber, Account>,
    next_number: u32,
    detector: AmlDetector,
}

impl Bank {
    pub fn new(detector: AmlDetector) -> Self {
        Self {
            accounts: BTreeMap::new(),
            next_number: FIRST_ACCOUNT_NUMBER,
            detector,
        }
    }

    /// Open an account for a holder.
    ///
    /// Preconditions: age >= 18 and salary >= 10 000. On refusal no
    /// account is created and no number is consumed. The PIN is hashed
    /// immediately; the raw value is not retained.
    pub fn open_account(
        &mut self,
        name: impl Into<String>,
        age: u32,
        salary: Decimal,
        pin: i64,
        initial_balance: Decimal,
    ) -> Result<AccountNumber, BankError> {
        if age < MINIMUM_AGE {
            return Err(BankError::HolderTooYoung {
                age,
                minimum: MINIMUM_AGE,
            });
        }
        let minimum_salary = Decimal::new(10_000, 0);
        if salary < minimum_salary {
            return Err(BankError::SalaryBelowMinimum {
                salary,
                minimum: minimum_salary,
            });
        }
        let initial_balance = Amount::new(initial_balance)?;

        let number = AccountNumber(self.next_number);
        self.next_number += 1;

        let name = name.into();
        info!(%number, holder = %name, "account opened");
        self.accounts.insert(
            number,
            Account::new(number, name, age, salary, PinHash::from_pin(pin), initial_balance),
        );
        Ok(number)
    }

    /// Deposit into an account.
    ///
    /// Runs the large-deposit and frequent-transactions rules against the
    /// post-mutation state; alerts never undo the deposit.
    pub fn deposit(&mut self, number: AccountNumber, amount: Decimal) -> Result<Receipt, BankError> {
        let account = self
            .accounts
            .get_mut(&number)
            .ok_or(BankError::UnknownAccount(number))?;
        let amount = Amount::new(amount)?;
        let now = Utc::now();

        account.deposit(amount, now)?;
        debug!(%number, amount = %amount, balance = %account.balance(), "deposit applied");

        let alerts = self.detector.after_deposit(account, amount.value(), now);
        log_alerts(&alerts);
        Ok(Receipt {
            account: number,
            balance: account.balance(),
            alerts,
        })
    }

    /// Withdraw from an account.
    ///
    /// An amount exceeding the balance is refused with no state change.
    /// On success, runs the circular-behavior and frequent-transactions
    /// rules against the post-mutation state.
    pub fn withdraw(
        &mut self,
        number: AccountNumber,
        amount: Decimal,
    ) -> Result<Receipt, BankError> {
        let account = self
            .accounts
            .get_mut(&number)
            .ok_or(BankError::UnknownAccount(number))?;
        let amount = Amount::new(amount)?;
        let now = Utc::now();

        account.withdraw(amount, now)?;
        debug!(%number, amount = %amount, balance = %account.balance(), "withdrawal applied");

        let alerts = self.detector.after_withdrawal(account, now);
        log_alerts(&alerts);
        Ok(Receipt {
            account: number,
            balance: account.balance(),
            alerts,
        })
    }

    /// Current balance, with the ghost-account check run on the snapshot
    pub fn balance(&self, number: AccountNumber) -> Result<Receipt, BankError> {
        let account = self
            .accounts
            .get(&number)
            .ok_or(BankError::UnknownAccount(number))?;
        let alerts = self.detector.on_balance_inquiry(account);
        log_alerts(&alerts);
        Ok(Receipt {
            account: number,
            balance: account.balance(),
            alerts,
        })
    }

    /// Transaction history in chronological order
    pub fn statement(&self, number: AccountNumber) -> Result<&[Transaction], BankError> {
        self.accounts
            .get(&number)
            .map(Account::transactions)
            .ok_or(BankError::UnknownAccount(number))
    }

    /// Resolve a number and PIN to an account.
    ///
    /// Unknown number and wrong PIN are indistinguishable to the caller;
    /// both return `None`.
    pub fn authenticate(&self, number: AccountNumber, pin: i64) -> Option<&Account> {
        self.accounts
            .get(&number)
            .filter(|account| account.verify_pin(pin))
    }

    /// Look up an account by number
    pub fn find_account(&self, number: AccountNumber) -> Option<&Account> {
        self.accounts.get(&number)
    }

    /// Snapshots of all accounts in insertion (ascending-number) order
    pub fn list_accounts(&self) -> Vec<AccountSummary> {
        self.accounts.values().map(Account::summary).collect()
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    pub fn detector(&self) -> &AmlDetector {
        &self.detector
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::new(AmlDetector::default())
    }
}

fn log_alerts(alerts: &[AmlAlert]) {
    for alert in alerts {
        warn!(account = %alert.account, rule = %alert.rule, "{}", alert.reason);
    }
}
