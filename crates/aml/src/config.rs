//! Anomaly-detection thresholds
//!
//! Thresholds are configuration, not constants baked into rule logic.
//! Defaults reproduce the historical behavior of the system.

use chrono::Duration;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Configuration for the anomaly detector
///
/// Every field has a serde default, so a config file only needs to name
/// the thresholds it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmlConfig {
    /// A single deposit strictly above this amount is flagged
    #[serde(default = "default_large_deposit_threshold")]
    pub large_deposit_threshold: Decimal,

    /// A balance strictly above this makes an account a ghost candidate
    #[serde(default = "default_ghost_balance_threshold")]
    pub ghost_balance_threshold: Decimal,

    /// More than this many transactions inside the window is flagged
    #[serde(default = "default_frequent_tx_count")]
    pub frequent_tx_count: usize,

    /// Trailing window for the frequent-transactions rule, in seconds
    #[serde(default = "default_frequent_window_secs")]
    pub frequent_window_secs: i64,
}

// Default value functions for serde
fn default_large_deposit_threshold() -> Decimal {
    Decimal::new(50_000, 0)
}

fn default_ghost_balance_threshold() -> Decimal {
    Decimal::new(100_000, 0)
}

fn default_frequent_tx_count() -> usize {
    10
}

fn default_frequent_window_secs() -> i64 {
    60
}

impl Default for AmlConfig {
    fn default() -> Self {
        Self {
            large_deposit_threshold: default_large_deposit_threshold(),
            ghost_balance_threshold: default_ghost_balance_threshold(),
            frequent_tx_count: default_frequent_tx_count(),
            frequent_window_secs: default_frequent_window_secs(),
        }
    }
}

impl AmlConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Frequent-transactions window as a chrono Duration
    pub fn frequent_window(&self) -> Duration {
        Duration::seconds(self.frequent_window_secs)
    }
}
