//! Block-cipher padding schemes
//!
//! Every scheme extends input to a whole number of blocks and later removes
//! that extension. The counting schemes (PKCS#7, PKCS#5, ANSI X9.23,
//! ISO 10126, zero padding) all add `k = block_size - len % block_size`
//! bytes with `k` in `[1, block_size]`, so already-aligned input still gains
//! a full padding block and `unpad` can always locate the original boundary.
//!
//! [`Pkcs7`] deliberately keeps the lenient legacy behavior of trusting only
//! the final count byte; [`Pkcs7Strict`] verifies the whole padding run and
//! is the variant to prefer when no legacy ciphertexts are involved.

use rand_core::{CryptoRngCore, OsRng};

use crate::error::{Error, Result};

/// A padding strategy: a pure `pad`/`unpad` pair with no state.
pub trait PaddingScheme {
    /// Extend `data` to a positive multiple of `block_size`.
    ///
    /// Never fails for `block_size >= 1`.
    fn pad(&self, data: &[u8], block_size: usize) -> Vec<u8>;

    /// Remove the padding added by [`PaddingScheme::pad`].
    fn unpad(&self, data: &[u8]) -> Result<Vec<u8>>;
}

/// Number of padding bytes for the counting schemes.
fn pad_count(len: usize, block_size: usize) -> usize {
    block_size - len % block_size
}

/// Read and bound-check the trailing count byte.
fn read_count(data: &[u8]) -> Result<usize> {
    let k = *data.last().ok_or(Error::InvalidPadding)? as usize;
    // k == data.len() is valid: the whole input is padding and the
    // original plaintext was empty.
    if k == 0 || k > data.len() {
        return Err(Error::InvalidPadding);
    }
    Ok(k)
}

/// PKCS#7: append `k` bytes of value `k`.
///
/// `unpad` trusts only the final count byte and does not verify the
/// preceding `k-1` bytes. Callers interoperating with producers that emit
/// inconsistent fill bytes rely on this; use [`Pkcs7Strict`] otherwise.
pub struct Pkcs7;

impl PaddingScheme for Pkcs7 {
    fn pad(&self, data: &[u8], block_size: usize) -> Vec<u8> {
        let k = pad_count(data.len(), block_size);
        let mut out = Vec::with_capacity(data.len() + k);
        out.extend_from_slice(data);
        out.extend(std::iter::repeat(k as u8).take(k));
        out
    }

    fn unpad(&self, data: &[u8]) -> Result<Vec<u8>> {
        let k = read_count(data)?;
        Ok(data[..data.len() - k].to_vec())
    }
}

/// PKCS#7 with full validation: every one of the `k` padding bytes must
/// equal `k`.
pub struct Pkcs7Strict;

impl PaddingScheme for Pkcs7Strict {
    fn pad(&self, data: &[u8], block_size: usize) -> Vec<u8> {
        Pkcs7.pad(data, block_size)
    }

    fn unpad(&self, data: &[u8]) -> Result<Vec<u8>> {
        let k = read_count(data)?;
        let boundary = data.len() - k;
        if data[boundary..].iter().any(|&b| b as usize != k) {
            return Err(Error::InvalidPadding);
        }
        Ok(data[..boundary].to_vec())
    }
}

/// PKCS#5: byte-identical to PKCS#7, kept as a separate name for callers
/// that speak in PKCS#5 terms (8-byte-block ciphers).
pub struct Pkcs5;

impl PaddingScheme for Pkcs5 {
    fn pad(&self, data: &[u8], block_size: usize) -> Vec<u8> {
        Pkcs7.pad(data, block_size)
    }

    fn unpad(&self, data: &[u8]) -> Result<Vec<u8>> {
        Pkcs7.unpad(data)
    }
}

/// Zero padding: append `k` zero bytes.
///
/// Lossy for plaintexts that end in `0x00` bytes; `unpad` strips every
/// trailing zero. This is a documented limitation of the scheme, not a bug.
pub struct ZeroPadding;

impl PaddingScheme for ZeroPadding {
    fn pad(&self, data: &[u8], block_size: usize) -> Vec<u8> {
        let k = pad_count(data.len(), block_size);
        let mut out = Vec::with_capacity(data.len() + k);
        out.extend_from_slice(data);
        out.extend(std::iter::repeat(0u8).take(k));
        out
    }

    fn unpad(&self, data: &[u8]) -> Result<Vec<u8>> {
        let end = data
            .iter()
            .rposition(|&b| b != 0)
            .map_or(0, |pos| pos + 1);
        Ok(data[..end].to_vec())
    }
}

/// ANSI X9.23: append `k-1` zero bytes, then one count byte `k`.
///
/// `unpad` verifies that the fill bytes are all zero.
pub struct AnsiX923;

impl PaddingScheme for AnsiX923 {
    fn pad(&self, data: &[u8], block_size: usize) -> Vec<u8> {
        let k = pad_count(data.len(), block_size);
        let mut out = Vec::with_capacity(data.len() + k);
        out.extend_from_slice(data);
        out.extend(std::iter::repeat(0u8).take(k - 1));
        out.push(k as u8);
        out
    }

    fn unpad(&self, data: &[u8]) -> Result<Vec<u8>> {
        let k = read_count(data)?;
        let boundary = data.len() - k;
        if data[boundary..data.len() - 1].iter().any(|&b| b != 0) {
            return Err(Error::InvalidPadding);
        }
        Ok(data[..boundary].to_vec())
    }
}

/// ISO 10126: append `k-1` random bytes, then one count byte `k`.
///
/// `unpad` trusts only the count byte; the random fill is never inspected.
pub struct Iso10126;

impl Iso10126 {
    /// Pad drawing the fill bytes from a caller-supplied random source.
    pub fn pad_with_rng(
        &self,
        data: &[u8],
        block_size: usize,
        rng: &mut dyn CryptoRngCore,
    ) -> Vec<u8> {
        let k = pad_count(data.len(), block_size);
        let mut out = Vec::with_capacity(data.len() + k);
        out.extend_from_slice(data);
        let fill_start = out.len();
        out.resize(fill_start + k - 1, 0);
        rng.fill_bytes(&mut out[fill_start..]);
        out.push(k as u8);
        out
    }
}

impl PaddingScheme for Iso10126 {
    fn pad(&self, data: &[u8], block_size: usize) -> Vec<u8> {
        self.pad_with_rng(data, block_size, &mut OsRng)
    }

    fn unpad(&self, data: &[u8]) -> Result<Vec<u8>> {
        let k = read_count(data)?;
        Ok(data[..data.len() - k].to_vec())
    }
}

/// No-op padding: identity in both directions, for stream-style use of the
/// pipelines or pre-aligned input.
pub struct NoPadding;

impl PaddingScheme for NoPadding {
    fn pad(&self, data: &[u8], _block_size: usize) -> Vec<u8> {
        data.to_vec()
    }

    fn unpad(&self, data: &[u8]) -> Result<Vec<u8>> {
        Ok(data.to_vec())
    }
}
