//! Corebank AML - Heuristic anomaly detection
//!
//! Four independent rules evaluated against an account's current state
//! and history. Each rule is a pure predicate over immutable snapshots;
//! no rule owns persistent state, and a triggered rule never blocks or
//! reverses the mutation it inspected - alerts are advisory only.
//!
//! Thresholds live in [`AmlConfig`] rather than in the rule logic, so
//! boundary values can be exercised in tests and tuned per deployment.

pub mod alert;
pub mod config;
pub mod detector;

pub use alert::{AmlAlert, AmlRule};
pub use config::{AmlConfig, ConfigError};
pub use detector::AmlDetector;
