//! Blowfish pipelines
//!
//! Variable key length (1 to 56 bytes at the policy layer; the underlying
//! cipher additionally requires at least 4 bytes and reports anything
//! shorter as a construction failure). 8-byte blocks.

use blowfish::Blowfish;
use rand_core::OsRng;

use super::mode;
use crate::{
    algorithm::Algorithm,
    error::Result,
    padding::{PaddingScheme, Pkcs7},
};

/// Encrypt in ECB mode with a caller-chosen padding scheme.
pub fn encrypt_ecb_with(
    key: &[u8],
    plaintext: &[u8],
    padding: &dyn PaddingScheme,
) -> Result<Vec<u8>> {
    Algorithm::Blowfish.validate_key(key)?;
    mode::ecb_encrypt::<Blowfish>(key, plaintext, padding)
}

/// Encrypt in ECB mode with PKCS#7 padding.
pub fn encrypt_ecb(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    encrypt_ecb_with(key, plaintext, &Pkcs7)
}

/// Decrypt in ECB mode with a caller-chosen padding scheme.
pub fn decrypt_ecb_with(
    key: &[u8],
    ciphertext: &[u8],
    padding: &dyn PaddingScheme,
) -> Result<Vec<u8>> {
    Algorithm::Blowfish.validate_key(key)?;
    mode::ecb_decrypt::<Blowfish>(key, ciphertext, padding)
}

/// Decrypt in ECB mode with PKCS#7 padding.
pub fn decrypt_ecb(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    decrypt_ecb_with(key, ciphertext, &Pkcs7)
}

/// Encrypt in CBC mode; returns `IV || ciphertext`.
pub fn encrypt_cbc_with(
    key: &[u8],
    plaintext: &[u8],
    padding: &dyn PaddingScheme,
) -> Result<Vec<u8>> {
    Algorithm::Blowfish.validate_key(key)?;
    mode::cbc_encrypt::<cbc::Encryptor<Blowfish>>(key, plaintext, padding, &mut OsRng)
}

/// Encrypt in CBC mode with PKCS#7 padding.
pub fn encrypt_cbc(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    encrypt_cbc_with(key, plaintext, &Pkcs7)
}

/// Decrypt a CBC `IV || ciphertext` envelope.
pub fn decrypt_cbc_with(
    key: &[u8],
    ciphertext: &[u8],
    padding: &dyn PaddingScheme,
) -> Result<Vec<u8>> {
    Algorithm::Blowfish.validate_key(key)?;
    mode::cbc_decrypt::<cbc::Decryptor<Blowfish>>(key, ciphertext, padding)
}

/// Decrypt a CBC `IV || ciphertext` envelope with PKCS#7 padding.
pub fn decrypt_cbc(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    decrypt_cbc_with(key, ciphertext, &Pkcs7)
}

/// Encrypt in CFB mode; returns `IV || ciphertext`, no padding.
pub fn encrypt_cfb(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    Algorithm::Blowfish.validate_key(key)?;
    mode::cfb_encrypt::<cfb_mode::Encryptor<Blowfish>>(key, plaintext, &mut OsRng)
}

/// Decrypt a CFB `IV || ciphertext` envelope.
pub fn decrypt_cfb(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    Algorithm::Blowfish.validate_key(key)?;
    mode::cfb_decrypt::<cfb_mode::Decryptor<Blowfish>>(key, ciphertext)
}

/// Encrypt in CTR mode; returns `IV || ciphertext`, no padding.
pub fn encrypt_ctr(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    Algorithm::Blowfish.validate_key(key)?;
    mode::keystream_encrypt::<ctr::CtrCore<Blowfish, ctr::flavors::Ctr64BE>>(key, plaintext, &mut OsRng)
}

/// Decrypt a CTR `IV || ciphertext` envelope.
pub fn decrypt_ctr(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    Algorithm::Blowfish.validate_key(key)?;
    mode::keystream_decrypt::<ctr::CtrCore<Blowfish, ctr::flavors::Ctr64BE>>(key, ciphertext)
}

/// Encrypt in OFB mode; returns `IV || ciphertext`, no padding.
pub fn encrypt_ofb(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    Algorithm::Blowfish.validate_key(key)?;
    mode::keystream_encrypt::<ofb::OfbCore<Blowfish>>(key, plaintext, &mut OsRng)
}

/// Decrypt an OFB `IV || ciphertext` envelope.
pub fn decrypt_ofb(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    Algorithm::Blowfish.validate_key(key)?;
    mode::keystream_decrypt::<ofb::OfbCore<Blowfish>>(key, ciphertext)
}
