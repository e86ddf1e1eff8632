//! Minimal DER codec for an ECDSA `(r, s)` signature pair
//!
//! Encodes `SEQUENCE { INTEGER r, INTEGER s }` with single-byte lengths,
//! which covers every curve up to P-521 with room to spare. Components that
//! would need a long-form length are rejected rather than mis-encoded.

use num_bigint::BigUint;

use crate::error::{DerError, Result};

const TAG_SEQUENCE: u8 = 0x30;
const TAG_INTEGER: u8 = 0x02;

/// DER INTEGER content bytes for an unsigned value: big-endian magnitude,
/// empty for zero, with a leading 0x00 when the high bit is set so the
/// value stays non-negative under two's-complement interpretation.
fn int_content(value: &BigUint) -> std::result::Result<Vec<u8>, DerError> {
    let mut bytes = value.to_bytes_be();
    if bytes == [0] {
        bytes.clear();
    }
    if let Some(&first) = bytes.first() {
        if first & 0x80 != 0 {
            bytes.insert(0, 0x00);
        }
    }
    if bytes.len() > 0x7f {
        return Err(DerError::UnsupportedLength);
    }
    Ok(bytes)
}

/// Encode `(r, s)` as a DER SEQUENCE of two INTEGERs.
pub fn encode(r: &BigUint, s: &BigUint) -> Result<Vec<u8>> {
    let r_bytes = int_content(r)?;
    let s_bytes = int_content(s)?;

    let body_len = 2 + r_bytes.len() + 2 + s_bytes.len();
    if body_len > 0x7f {
        return Err(DerError::UnsupportedLength.into());
    }

    let mut out = Vec::with_capacity(2 + body_len);
    out.push(TAG_SEQUENCE);
    out.push(body_len as u8);
    out.push(TAG_INTEGER);
    out.push(r_bytes.len() as u8);
    out.extend_from_slice(&r_bytes);
    out.push(TAG_INTEGER);
    out.push(s_bytes.len() as u8);
    out.extend_from_slice(&s_bytes);
    Ok(out)
}

/// Decode a DER SEQUENCE of two INTEGERs back into `(r, s)`.
///
/// Validation is structural only: tags, lengths, and overall size. Trailing
/// bytes beyond the declared sequence are ignored, and a zero component may
/// arrive either as empty content or as a single 0x00 byte.
pub fn decode(data: &[u8]) -> Result<(BigUint, BigUint)> {
    if data.len() < 6 {
        return Err(DerError::TooShort.into());
    }
    if data[0] != TAG_SEQUENCE {
        return Err(DerError::NotASequence.into());
    }
    let seq_len = data[1] as usize;
    if data.len() < seq_len + 2 {
        return Err(DerError::SequenceLength.into());
    }
    let rest = &data[2..];

    if rest.len() < 2 || rest[0] != TAG_INTEGER {
        return Err(DerError::MissingR.into());
    }
    let r_len = rest[1] as usize;
    if rest.len() < r_len + 2 {
        return Err(DerError::RLength.into());
    }
    let r = BigUint::from_bytes_be(&rest[2..2 + r_len]);
    let rest = &rest[2 + r_len..];

    if rest.len() < 2 || rest[0] != TAG_INTEGER {
        return Err(DerError::MissingS.into());
    }
    let s_len = rest[1] as usize;
    if rest.len() < s_len + 2 {
        return Err(DerError::SLength.into());
    }
    let s = BigUint::from_bytes_be(&rest[2..2 + s_len]);

    Ok((r, s))
}
