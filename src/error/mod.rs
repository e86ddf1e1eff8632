//! Error types for the cipherkit crate

use thiserror::Error;

/// Errors produced by the cipher pipelines and codecs.
///
/// Every failure is returned to the immediate caller. Nothing is retried or
/// silently recovered; padding and authentication failures in particular are
/// always surfaced.
#[derive(Debug, Error)]
pub enum Error {
    /// Key length does not satisfy the algorithm's key rule.
    #[error("invalid key length: must be {expected} for {algorithm}")]
    InvalidKeyLength {
        algorithm: &'static str,
        expected: &'static str,
    },

    /// The underlying cipher or AEAD could not be constructed.
    #[error("cipher initialization failed: {0}")]
    CipherInit(String),

    /// The injected random source failed to produce IV/nonce bytes.
    #[error("random source failure: {0}")]
    RandomSource(String),

    /// Ciphertext is shorter than the IV or nonce it must carry.
    #[error("ciphertext too short")]
    ShortCiphertext,

    /// Ciphertext payload is not a whole number of cipher blocks.
    #[error("ciphertext is not a multiple of the block size")]
    NotBlockAligned,

    /// Unpadding detected an inconsistent padding count.
    #[error("invalid padding")]
    InvalidPadding,

    /// Caller-supplied nonce has the wrong length.
    #[error("invalid nonce length: must be {expected} bytes")]
    InvalidNonceLength { expected: usize },

    /// AEAD encryption failed.
    #[error("AEAD encryption failed")]
    AeadSeal,

    /// AEAD tag verification failed during decryption.
    #[error("AEAD authentication failed")]
    AeadAuthentication,

    /// Legacy hex ciphertext could not be decoded.
    #[error("hex decode failed: {0}")]
    Hex(#[from] hex::FromHexError),

    /// Signature DER encode/decode failure.
    #[error("invalid DER signature: {0}")]
    Der(#[from] DerError),
}

/// Failure kinds of the minimal ECDSA signature DER codec.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DerError {
    #[error("data too short")]
    TooShort,

    #[error("missing SEQUENCE tag")]
    NotASequence,

    #[error("incorrect sequence length")]
    SequenceLength,

    #[error("missing INTEGER tag for r")]
    MissingR,

    #[error("incorrect r length")]
    RLength,

    #[error("missing INTEGER tag for s")]
    MissingS,

    #[error("incorrect s length")]
    SLength,

    /// A component needs a long-form DER length, which this codec does not
    /// support.
    #[error("integer does not fit a single-byte DER length")]
    UnsupportedLength,
}

/// Result type alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidKeyLength {
            algorithm: "DES",
            expected: "8 bytes",
        };
        assert_eq!(
            err.to_string(),
            "invalid key length: must be 8 bytes for DES"
        );

        let err = Error::ShortCiphertext;
        assert_eq!(err.to_string(), "ciphertext too short");

        let err = Error::Der(DerError::MissingR);
        assert_eq!(
            err.to_string(),
            "invalid DER signature: missing INTEGER tag for r"
        );
    }
}
