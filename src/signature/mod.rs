//! ECDSA signature interchange
//!
//! Carries an ECDSA signature as its raw `(r, s)` pair and converts it to
//! and from the DER wire form used by X.509 and JOSE tooling. Signing and
//! verification themselves are out of scope; this is the interchange layer
//! around whatever produced the pair.

pub mod der;

use num_bigint::BigUint;

use crate::error::Result;

/// An ECDSA signature as its two scalar components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EcdsaSignature {
    pub r: BigUint,
    pub s: BigUint,
}

impl EcdsaSignature {
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Self { r, s }
    }

    /// Serialize as `SEQUENCE { INTEGER r, INTEGER s }`.
    pub fn to_der(&self) -> Result<Vec<u8>> {
        der::encode(&self.r, &self.s)
    }

    /// Parse a DER-encoded signature.
    pub fn from_der(data: &[u8]) -> Result<Self> {
        let (r, s) = der::decode(data)?;
        Ok(Self { r, s })
    }
}
