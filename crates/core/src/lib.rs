//! Corebank Core - Domain types
//!
//! This crate contains the fundamental types used across Corebank:
//! - `Amount`: Non-negative decimal wrapper for monetary values
//! - `PinHash`: One-way credential token derived from a numeric PIN

pub mod amount;
pub mod credential;

pub use amount::{Amount, AmountError};
pub use credential::PinHash;
