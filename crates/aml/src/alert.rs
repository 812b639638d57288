//! Advisory anomaly signals

use corebank_ledger::AccountNumber;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{Display, EnumString};

/// The heuristic rules the detector evaluates
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AmlRule {
    /// Single deposit above the configured threshold
    LargeDeposit,
    /// High balance with missing or implausible holder identity
    GhostAccount,
    /// Burst of transactions inside a short trailing window
    FrequentTransactions,
    /// Deposit immediately reversed by a withdrawal in the same second
    CircularBehavior,
}

impl AmlRule {
    /// Short human description, used by shells when rendering warnings
    pub fn description(&self) -> &'static str {
        match self {
            AmlRule::LargeDeposit => "unusually large single deposit",
            AmlRule::GhostAccount => "high balance with missing or implausible holder identity",
            AmlRule::FrequentTransactions => "burst of transactions in a short window",
            AmlRule::CircularBehavior => "deposit immediately reversed by a withdrawal",
        }
    }
}

/// A non-blocking advisory signal raised by one rule.
///
/// An alert never fails, reverses, or modifies the operation that
/// triggered it; surfacing it is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmlAlert {
    /// Which rule fired
    pub rule: AmlRule,
    /// The account the rule was evaluated against
    pub account: AccountNumber,
    /// Human-readable trigger context
    pub reason: String,
}

impl AmlAlert {
    pub fn new(rule: AmlRule, account: AccountNumber, reason: impl Into<String>) -> Self {
        Self {
            rule,
            account,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for AmlAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.rule, self.reason)
    }
}
