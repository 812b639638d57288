//! One-way PIN credential token
//!
//! The raw PIN is never stored. Accounts keep only the SHA-256 digest of
//! its decimal representation, and verification recomputes the digest and
//! compares tokens.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Hex-encoded SHA-256 digest of a numeric PIN.
///
/// Deterministic: the same PIN always yields the same token, so token
/// equality stands in for PIN equality. The transform is one-way; nothing
/// in this type recovers the PIN.
///
/// Any integer PIN is accepted. Length and format are deliberately not
/// validated here.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinHash(String);

impl PinHash {
    /// Derive the verification token for a PIN.
    pub fn from_pin(pin: i64) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(pin.to_string().as_bytes());
        Self(hex::encode(hasher.finalize()))
    }

    /// Recompute the token for `pin` and compare against the stored one.
    pub fn verify(&self, pin: i64) -> bool {
        self.0 == Self::from_pin(pin).0
    }

    /// Hex token, e.g. for audit output
    pub fn as_hex(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PinHash {
    // Abbreviated on purpose: full tokens do not belong in logs
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PinHash({}..)", &self.0[..8])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        assert_eq!(PinHash::from_pin(1234), PinHash::from_pin(1234));
    }

    #[test]
    fn test_verify_correct_pin() {
        let token = PinHash::from_pin(1234);
        assert!(token.verify(1234));
    }

    #[test]
    fn test_verify_wrong_pin() {
        let token = PinHash::from_pin(1234);
        assert!(!token.verify(9999));
        assert!(!token.verify(-1234));
    }

    #[test]
    fn test_distinct_pins_distinct_tokens() {
        assert_ne!(PinHash::from_pin(1234), PinHash::from_pin(1235));
    }

    #[test]
    fn test_any_integer_accepted() {
        // No format validation: negative and oversized PINs are legal
        assert!(PinHash::from_pin(-7).verify(-7));
        assert!(PinHash::from_pin(i64::MAX).verify(i64::MAX));
    }

    #[test]
    fn test_token_is_hex_sha256() {
        let token = PinHash::from_pin(1234);
        assert_eq!(token.as_hex().len(), 64);
        assert!(token.as_hex().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_debug_does_not_print_full_token() {
        let token = PinHash::from_pin(1234);
        let debug = format!("{:?}", token);
        assert!(!debug.contains(token.as_hex()));
    }
}
