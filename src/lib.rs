//! # cipherkit
//!
//! Symmetric encryption pipelines with explicit key policies, pluggable
//! block padding, and a small signature interchange layer.
//!
//! ## Modules
//!
//! - [`symmetric`] - AES / DES / 3DES / Blowfish / ChaCha20 pipelines
//!   (GCM and ChaCha20-Poly1305 authenticated by default, classic modes
//!   for interoperability, plus the legacy hex surface)
//! - [`padding`] - PKCS#7 and friends behind one [`PaddingScheme`] trait
//! - [`algorithm`] - per-algorithm key-length policy
//! - [`signature`] - ECDSA `(r, s)` DER interchange
//! - [`error`] - the crate-wide [`Error`] type

pub mod algorithm;
pub mod error;
pub mod padding;
pub mod signature;
pub mod symmetric;

pub use algorithm::Algorithm;
pub use error::{DerError, Error, Result};
pub use padding::{
    AnsiX923, Iso10126, NoPadding, PaddingScheme, Pkcs5, Pkcs7, Pkcs7Strict, ZeroPadding,
};
pub use signature::EcdsaSignature;
pub use symmetric::{aes, blowfish, chacha, des, legacy, mode};
