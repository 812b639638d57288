//! Immutable transaction records

use chrono::{DateTime, SubsecRound, Utc};
use corebank_core::Amount;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{Display, EnumString};

/// Direction of a balance-affecting event
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TxKind {
    Deposit,
    Withdraw,
}

/// One immutable deposit or withdrawal event.
///
/// Created exclusively by the owning `Account`; within a history,
/// insertion order is chronological order. Timestamps are recorded at
/// second resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    kind: TxKind,
    amount: Amount,
    timestamp: DateTime<Utc>,
}

impl Transaction {
    pub(crate) fn new(kind: TxKind, amount: Amount, at: DateTime<Utc>) -> Self {
        Self {
            kind,
            amount,
            timestamp: at.trunc_subsecs(0),
        }
    }

    pub fn kind(&self) -> TxKind {
        self.kind
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// Recording time, truncated to whole seconds
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | Amount: {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.kind,
            self.amount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn test_timestamp_truncated_to_seconds() {
        let at = Utc
            .with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
            .unwrap()
            .checked_add_signed(chrono::Duration::milliseconds(750))
            .unwrap();
        let tx = Transaction::new(TxKind::Deposit, Amount::new(dec!(100)).unwrap(), at);
        assert_eq!(tx.timestamp().timestamp_subsec_millis(), 0);
        assert_eq!(tx.timestamp().timestamp(), at.timestamp());
    }

    #[test]
    fn test_kind_display_codes() {
        assert_eq!(TxKind::Deposit.to_string(), "DEPOSIT");
        assert_eq!(TxKind::Withdraw.to_string(), "WITHDRAW");
    }

    #[test]
    fn test_kind_serde_codes() {
        let json = serde_json::to_string(&TxKind::Withdraw).unwrap();
        assert_eq!(json, "\"WITHDRAW\"");
    }

    #[test]
    fn test_display_line() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let tx = Transaction::new(TxKind::Withdraw, Amount::new(dec!(60000)).unwrap(), at);
        assert_eq!(
            tx.to_string(),
            "2024-05-01 12:00:00 | WITHDRAW | Amount: 60000"
        );
    }
}
