//! Key-length policy for the supported algorithms.
//!
//! A static table maps each algorithm to its allowed key lengths. Validation
//! is pure and runs before any random-source read or cipher construction.

use crate::error::{Error, Result};

/// Supported symmetric algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Aes,
    Des,
    TripleDes,
    Blowfish,
    ChaCha20,
}

/// Allowed key lengths for an algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyRule {
    /// Exactly this many bytes.
    Exact(usize),
    /// One of the listed lengths.
    OneOf(&'static [usize]),
    /// Any length in the inclusive range.
    Range(usize, usize),
}

impl Algorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Aes => "AES",
            Algorithm::Des => "DES",
            Algorithm::TripleDes => "3DES",
            Algorithm::Blowfish => "Blowfish",
            Algorithm::ChaCha20 => "ChaCha20",
        }
    }

    /// The static key rule table.
    pub fn key_rule(&self) -> KeyRule {
        match self {
            Algorithm::Aes => KeyRule::OneOf(&[16, 24, 32]),
            Algorithm::Des => KeyRule::Exact(8),
            Algorithm::TripleDes => KeyRule::Exact(24),
            Algorithm::Blowfish => KeyRule::Range(1, 56),
            Algorithm::ChaCha20 => KeyRule::Exact(32),
        }
    }

    fn expected(&self) -> &'static str {
        match self {
            Algorithm::Aes => "16, 24 or 32 bytes",
            Algorithm::Des => "8 bytes",
            Algorithm::TripleDes => "24 bytes",
            Algorithm::Blowfish => "between 1 and 56 bytes",
            Algorithm::ChaCha20 => "32 bytes",
        }
    }

    /// The error value for a key that violates this algorithm's rule.
    pub fn key_length_error(&self) -> Error {
        Error::InvalidKeyLength {
            algorithm: self.name(),
            expected: self.expected(),
        }
    }

    /// Validate a key against the rule table.
    pub fn validate_key(&self, key: &[u8]) -> Result<()> {
        let ok = match self.key_rule() {
            KeyRule::Exact(n) => key.len() == n,
            KeyRule::OneOf(set) => set.contains(&key.len()),
            KeyRule::Range(lo, hi) => key.len() >= lo && key.len() <= hi,
        };
        if ok {
            Ok(())
        } else {
            Err(self.key_length_error())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_rules() {
        assert!(Algorithm::Des.validate_key(&[0u8; 8]).is_ok());
        assert!(Algorithm::Des.validate_key(&[0u8; 7]).is_err());
        assert!(Algorithm::TripleDes.validate_key(&[0u8; 24]).is_ok());
        assert!(Algorithm::TripleDes.validate_key(&[0u8; 16]).is_err());
        assert!(Algorithm::ChaCha20.validate_key(&[0u8; 32]).is_ok());
        assert!(Algorithm::ChaCha20.validate_key(&[0u8; 16]).is_err());

        for len in [16, 24, 32] {
            assert!(Algorithm::Aes.validate_key(&vec![0u8; len]).is_ok());
        }
        assert!(Algorithm::Aes.validate_key(&[0u8; 20]).is_err());

        assert!(Algorithm::Blowfish.validate_key(&[0u8; 1]).is_ok());
        assert!(Algorithm::Blowfish.validate_key(&[0u8; 56]).is_ok());
        assert!(Algorithm::Blowfish.validate_key(&[]).is_err());
        assert!(Algorithm::Blowfish.validate_key(&[0u8; 57]).is_err());
    }

    #[test]
    fn test_error_message_shape() {
        let err = Algorithm::Des.validate_key(&[0u8; 3]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid key length: must be 8 bytes for DES"
        );

        let err = Algorithm::Blowfish.validate_key(&[0u8; 57]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid key length: must be between 1 and 56 bytes for Blowfish"
        );
    }
}
