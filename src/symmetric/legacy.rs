//! Legacy hex-encoded cipher surface
//!
//! Older callers exchange ciphertexts as lowercase hex strings. This module
//! keeps that surface alive for AES so existing data stays readable:
//!
//! - `*_cbc_hex` / `*_cfb_hex` / `*_ctr_hex` / `*_ofb_hex` are the modern
//!   `IV || payload` envelopes, hex-encoded.
//! - The `*_ecb_hex` pair is the historical oddity: CBC with an IV derived
//!   from the key and no random component, producing a bare hex payload.
//!   Identical (key, plaintext) pairs yield identical output, and the IV is
//!   known to anyone who knows the key. That is a real weakness; the pair
//!   is deprecated and retained only so existing ciphertexts can still be
//!   read and reproduced.

use cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};

use super::{aes, dispatch_aes};
use crate::{
    error::{Error, Result},
    padding::{PaddingScheme, Pkcs7},
};

/// Key-derived IV: the key copied into a zeroed IV-size buffer (truncated
/// or zero-extended as needed).
fn derive_iv(key: &[u8], iv_size: usize) -> Vec<u8> {
    let mut iv = vec![0u8; iv_size];
    let n = key.len().min(iv_size);
    iv[..n].copy_from_slice(&key[..n]);
    iv
}

fn keyed_iv_encrypt<M>(key: &[u8], plaintext: &[u8], padding: &dyn PaddingScheme) -> Result<String>
where
    M: KeyIvInit + BlockEncryptMut,
{
    let block_size = M::block_size();
    let iv = derive_iv(key, M::iv_size());
    let mut mode = M::new_from_slices(key, &iv).map_err(|e| Error::CipherInit(e.to_string()))?;

    let mut buf = padding.pad(plaintext, block_size);
    for block in buf.chunks_exact_mut(block_size) {
        mode.encrypt_block_mut(cipher::Block::<M>::from_mut_slice(block));
    }
    Ok(hex::encode(buf))
}

fn keyed_iv_decrypt<M>(key: &[u8], ciphertext: &str, padding: &dyn PaddingScheme) -> Result<Vec<u8>>
where
    M: KeyIvInit + BlockDecryptMut,
{
    let mut buf = hex::decode(ciphertext)?;

    let block_size = M::block_size();
    if buf.len() % block_size != 0 {
        return Err(Error::NotBlockAligned);
    }

    let iv = derive_iv(key, M::iv_size());
    let mut mode = M::new_from_slices(key, &iv).map_err(|e| Error::CipherInit(e.to_string()))?;
    for block in buf.chunks_exact_mut(block_size) {
        mode.decrypt_block_mut(cipher::Block::<M>::from_mut_slice(block));
    }
    padding.unpad(&buf)
}

/// Historical "ECB" encryption: AES-CBC with a key-derived IV, bare hex
/// payload, deterministic per (key, plaintext).
#[deprecated(
    note = "CBC with a key-derived IV; deterministic and predictable. \
            Use aes::encrypt_cbc (or aes::encrypt) for new data."
)]
pub fn aes_encrypt_ecb_hex(key: &[u8], plaintext: &[u8]) -> Result<String> {
    dispatch_aes!(key, C => keyed_iv_encrypt::<cbc::Encryptor<C>>(key, plaintext, &Pkcs7))
}

/// Inverse of [`aes_encrypt_ecb_hex`].
#[deprecated(
    note = "CBC with a key-derived IV; deterministic and predictable. \
            Use aes::decrypt_cbc (or aes::decrypt) for new data."
)]
pub fn aes_decrypt_ecb_hex(key: &[u8], ciphertext: &str) -> Result<Vec<u8>> {
    dispatch_aes!(key, C => keyed_iv_decrypt::<cbc::Decryptor<C>>(key, ciphertext, &Pkcs7))
}

/// AES-CBC with a random IV, hex-encoded `IV || ciphertext`.
pub fn aes_encrypt_cbc_hex(key: &[u8], plaintext: &[u8]) -> Result<String> {
    Ok(hex::encode(aes::encrypt_cbc(key, plaintext)?))
}

/// Inverse of [`aes_encrypt_cbc_hex`].
pub fn aes_decrypt_cbc_hex(key: &[u8], ciphertext: &str) -> Result<Vec<u8>> {
    aes::decrypt_cbc(key, &hex::decode(ciphertext)?)
}

/// AES-CFB, hex-encoded `IV || ciphertext`.
pub fn aes_encrypt_cfb_hex(key: &[u8], plaintext: &[u8]) -> Result<String> {
    Ok(hex::encode(aes::encrypt_cfb(key, plaintext)?))
}

/// Inverse of [`aes_encrypt_cfb_hex`].
pub fn aes_decrypt_cfb_hex(key: &[u8], ciphertext: &str) -> Result<Vec<u8>> {
    aes::decrypt_cfb(key, &hex::decode(ciphertext)?)
}

/// AES-CTR, hex-encoded `IV || ciphertext`.
pub fn aes_encrypt_ctr_hex(key: &[u8], plaintext: &[u8]) -> Result<String> {
    Ok(hex::encode(aes::encrypt_ctr(key, plaintext)?))
}

/// Inverse of [`aes_encrypt_ctr_hex`].
pub fn aes_decrypt_ctr_hex(key: &[u8], ciphertext: &str) -> Result<Vec<u8>> {
    aes::decrypt_ctr(key, &hex::decode(ciphertext)?)
}

/// AES-OFB, hex-encoded `IV || ciphertext`.
pub fn aes_encrypt_ofb_hex(key: &[u8], plaintext: &[u8]) -> Result<String> {
    Ok(hex::encode(aes::encrypt_ofb(key, plaintext)?))
}

/// Inverse of [`aes_encrypt_ofb_hex`].
pub fn aes_decrypt_ofb_hex(key: &[u8], ciphertext: &str) -> Result<Vec<u8>> {
    aes::decrypt_ofb(key, &hex::decode(ciphertext)?)
}

#[cfg(test)]
#[allow(deprecated)]
mod tests {
    use super::*;

    #[test]
    fn test_keyed_iv_pair_is_deterministic() {
        let key = [0x11u8; 32];
        let plaintext = b"same in, same out";

        let a = aes_encrypt_ecb_hex(&key, plaintext).unwrap();
        let b = aes_encrypt_ecb_hex(&key, plaintext).unwrap();
        assert_eq!(a, b); // no random IV anywhere

        assert!(a.bytes().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(aes_decrypt_ecb_hex(&key, &a).unwrap(), plaintext);
    }

    #[test]
    fn test_keyed_iv_differs_from_true_ecb() {
        // The historical name says ECB but the chaining is CBC: with more
        // than one block, equal plaintext blocks do not produce equal
        // ciphertext blocks.
        let key = [0x22u8; 16];
        let plaintext = [0xaau8; 32]; // two identical blocks
        let hex_ct = aes_encrypt_ecb_hex(&key, &plaintext).unwrap();
        let raw = hex::decode(&hex_ct).unwrap();
        assert_ne!(raw[..16], raw[16..32]);
    }

    #[test]
    fn test_hex_envelopes_round_trip() {
        let key = [0x33u8; 32];
        let plaintext = b"hex transported payload";

        let ct = aes_encrypt_cbc_hex(&key, plaintext).unwrap();
        assert_eq!(aes_decrypt_cbc_hex(&key, &ct).unwrap(), plaintext);

        let ct = aes_encrypt_cfb_hex(&key, plaintext).unwrap();
        assert_eq!(aes_decrypt_cfb_hex(&key, &ct).unwrap(), plaintext);

        let ct = aes_encrypt_ctr_hex(&key, plaintext).unwrap();
        assert_eq!(aes_decrypt_ctr_hex(&key, &ct).unwrap(), plaintext);

        let ct = aes_encrypt_ofb_hex(&key, plaintext).unwrap();
        assert_eq!(aes_decrypt_ofb_hex(&key, &ct).unwrap(), plaintext);
    }

    #[test]
    fn test_bad_hex_rejected() {
        let key = [0x44u8; 32];
        assert!(matches!(
            aes_decrypt_cbc_hex(&key, "not hex at all"),
            Err(Error::Hex(_))
        ));
        assert!(matches!(
            aes_decrypt_ecb_hex(&key, "abcd12"), // 3 bytes, unaligned
            Err(Error::NotBlockAligned)
        ));
    }
}
