//! Heuristic anomaly rules ("AML checks")
//!
//! Each rule is a pure predicate over an account snapshot or its history.
//! Rules are independently callable and composable; the `after_*` /
//! `on_*` entry points bundle the subsets that apply to each ledger
//! operation.

use chrono::{DateTime, Utc};
use corebank_ledger::{Account, Transaction, TxKind};
use rust_decimal::Decimal;

use crate::alert::{AmlAlert, AmlRule};
use crate::config::AmlConfig;

/// Stateless detector; all state it inspects lives in the account itself
#[derive(Debug, Clone, Default)]
pub struct AmlDetector {
    config: AmlConfig,
}

impl AmlDetector {
    pub fn new(config: AmlConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AmlConfig {
        &self.config
    }

    /// Single deposit strictly above the configured threshold.
    ///
    /// Depositing exactly the threshold does not trigger.
    pub fn is_large_deposit(&self, amount: Decimal) -> bool {
        amount > self.config.large_deposit_threshold
    }

    /// High balance on an account with an empty holder name or zero age
    pub fn is_ghost_account(&self, account: &Account) -> bool {
        account.balance() > self.config.ghost_balance_threshold
            && (account.name().is_empty() || account.age() == 0)
    }

    /// More than the configured number of transactions within the
    /// trailing window ending at `now`.
    ///
    /// Walks the history newest-first and stops as soon as the count is
    /// exceeded or a transaction falls outside the window; history is
    /// chronological, so everything earlier is older still.
    pub fn is_frequent(&self, history: &[Transaction], now: DateTime<Utc>) -> bool {
        let cutoff = now - self.config.frequent_window();
        let mut recent = 0usize;
        for tx in history.iter().rev() {
            if tx.timestamp() < cutoff {
                break;
            }
            recent += 1;
            if recent > self.config.frequent_tx_count {
                return true;
            }
        }
        false
    }

    /// Deposit immediately reversed by a withdrawal recorded at the
    /// identical timestamp.
    ///
    /// Known-approximate rule: timestamps carry second resolution and
    /// are compared for exact equality, so "immediately" means "within
    /// the same recorded second".
    pub fn is_circular(&self, history: &[Transaction]) -> bool {
        match history {
            [.., prev, last] => {
                prev.kind() == TxKind::Deposit
                    && last.kind() == TxKind::Withdraw
                    && prev.timestamp() == last.timestamp()
            }
            _ => false,
        }
    }

    /// Rules evaluated after a successful deposit of `deposited`
    pub fn after_deposit(
        &self,
        account: &Account,
        deposited: Decimal,
        now: DateTime<Utc>,
    ) -> Vec<AmlAlert> {
        let mut alerts = Vec::new();
        if self.is_large_deposit(deposited) {
            alerts.push(AmlAlert::new(
                AmlRule::LargeDeposit,
                account.number(),
                format!(
                    "deposit of {} exceeds threshold {}",
                    deposited, self.config.large_deposit_threshold
                ),
            ));
        }
        if self.is_frequent(account.transactions(), now) {
            alerts.push(self.frequent_alert(account));
        }
        alerts
    }

    /// Rules evaluated after a successful withdrawal
    pub fn after_withdrawal(&self, account: &Account, now: DateTime<Utc>) -> Vec<AmlAlert> {
        let mut alerts = Vec::new();
        if self.is_circular(account.transactions()) {
            alerts.push(AmlAlert::new(
                AmlRule::CircularBehavior,
                account.number(),
                "deposit reversed by a withdrawal within the same second",
            ));
        }
        if self.is_frequent(account.transactions(), now) {
            alerts.push(self.frequent_alert(account));
        }
        alerts
    }

    /// Rules evaluated on a balance inquiry
    pub fn on_balance_inquiry(&self, account: &Account) -> Vec<AmlAlert> {
        let mut alerts = Vec::new();
        if self.is_ghost_account(account) {
            alerts.push(AmlAlert::new(
                AmlRule::GhostAccount,
                account.number(),
                format!(
                    "balance {} above {} with missing holder identity",
                    account.balance(),
                    self.config.ghost_balance_threshold
                ),
            ));
        }
        alerts
    }

    fn frequent_alert(&self, account: &Account) -> AmlAlert {
        AmlAlert::new(
            AmlRule::FrequentTransactions,
            account.number(),
            format!(
                "more than {} transactions within {}s",
                self.config.frequent_tx_count, self.config.frequent_window_secs
            ),
        )
    }
}
