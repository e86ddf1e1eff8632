//! AES pipelines
//!
//! GCM is the default authenticated pair; the classic modes
//! (ECB/CBC/CFB/CTR/OFB) are provided for interoperability. Key length
//! selects AES-128/192/256. The padded modes default to lenient PKCS#7 and
//! accept any [`PaddingScheme`] through the `_with` variants.
//!
//! ECB reveals equal plaintext blocks as equal ciphertext blocks; prefer GCM
//! (or at least CBC) for new data.

use aes_gcm::AesGcm;
use cipher::consts::U12;
use rand_core::OsRng;

use super::{dispatch_aes, mode};
use crate::{
    error::Result,
    padding::{PaddingScheme, Pkcs7},
};

/// Encrypt with AES-GCM; returns `nonce || ciphertext || tag`.
pub fn encrypt(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    dispatch_aes!(key, C => mode::aead_seal::<AesGcm<C, U12>>(key, plaintext, &mut OsRng))
}

/// Decrypt an AES-GCM envelope produced by [`encrypt`].
pub fn decrypt(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    dispatch_aes!(key, C => mode::aead_open::<AesGcm<C, U12>>(key, ciphertext))
}

/// Encrypt in ECB mode with a caller-chosen padding scheme.
pub fn encrypt_ecb_with(
    key: &[u8],
    plaintext: &[u8],
    padding: &dyn PaddingScheme,
) -> Result<Vec<u8>> {
    dispatch_aes!(key, C => mode::ecb_encrypt::<C>(key, plaintext, padding))
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
    dispatch_aes!(key, C => mode::ecb_decrypt::<C>(key, ciphertext, padding))
}

/// Decrypt in ECB mode with PKCS#7 padding.
pub fn decrypt_ecb(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    decrypt_ecb_with(key, ciphertext, &Pkcs7)
}

/// Encrypt in CBC mode with a caller-chosen padding scheme; returns
/// `IV || ciphertext` with a fresh random IV.
pub fn encrypt_cbc_with(
    key: &[u8],
    plaintext: &[u8],
    padding: &dyn PaddingScheme,
) -> Result<Vec<u8>> {
    dispatch_aes!(key, C => mode::cbc_encrypt::<cbc::Encryptor<C>>(key, plaintext, padding, &mut OsRng))
}

/// Encrypt in CBC mode with PKCS#7 padding.
pub fn encrypt_cbc(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    encrypt_cbc_with(key, plaintext, &Pkcs7)
}

/// Decrypt a CBC `IV || ciphertext` envelope with a caller-chosen padding
/// scheme.
pub fn decrypt_cbc_with(
    key: &[u8],
    ciphertext: &[u8],
    padding: &dyn PaddingScheme,
) -> Result<Vec<u8>> {
    dispatch_aes!(key, C => mode::cbc_decrypt::<cbc::Decryptor<C>>(key, ciphertext, padding))
}

/// Decrypt a CBC `IV || ciphertext` envelope with PKCS#7 padding.
pub fn decrypt_cbc(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    decrypt_cbc_with(key, ciphertext, &Pkcs7)
}

/// Encrypt in CFB mode; returns `IV || ciphertext`, no padding.
pub fn encrypt_cfb(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    dispatch_aes!(key, C => mode::cfb_encrypt::<cfb_mode::Encryptor<C>>(key, plaintext, &mut OsRng))
}

/// Decrypt a CFB `IV || ciphertext` envelope.
pub fn decrypt_cfb(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    dispatch_aes!(key, C => mode::cfb_decrypt::<cfb_mode::Decryptor<C>>(key, ciphertext))
}

/// Encrypt in CTR mode (big-endian full-block counter); returns
/// `IV || ciphertext`, no padding.
pub fn encrypt_ctr(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    dispatch_aes!(key, C => mode::keystream_encrypt::<ctr::CtrCore<C, ctr::flavors::Ctr128BE>>(key, plaintext, &mut OsRng))
}

/// Decrypt a CTR `IV || ciphertext` envelope.
pub fn decrypt_ctr(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    dispatch_aes!(key, C => mode::keystream_decrypt::<ctr::CtrCore<C, ctr::flavors::Ctr128BE>>(key, ciphertext))
}

/// Encrypt in OFB mode; returns `IV || ciphertext`, no padding.
pub fn encrypt_ofb(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    dispatch_aes!(key, C => mode::keystream_encrypt::<ofb::OfbCore<C>>(key, plaintext, &mut OsRng))
}

/// Decrypt an OFB `IV || ciphertext` envelope.
pub fn decrypt_ofb(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    dispatch_aes!(key, C => mode::keystream_decrypt::<ofb::OfbCore<C>>(key, ciphertext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::Error,
        padding::{AnsiX923, Iso10126, Pkcs5, Pkcs7Strict, ZeroPadding},
    };

    #[test]
    fn test_cbc_known_shape() {
        // AES-256, zero key, CBC, PKCS#7: 14 plaintext bytes pad to one
        // block with two 0x02 bytes, so the envelope is IV plus one block.
        let key = [0u8; 32];
        let plaintext = b"test plaintext";

        let ciphertext = encrypt_cbc(&key, plaintext).unwrap();
        assert_eq!(ciphertext.len(), 16 + 16);

        let decrypted = decrypt_cbc(&key, &ciphertext).unwrap();
        assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn test_gcm_round_trip_all_key_sizes() {
        let plaintext = b"authenticated payload";
        for len in [16usize, 24, 32] {
            let key = vec![0x42u8; len];
            let ciphertext = encrypt(&key, plaintext).unwrap();
            assert_eq!(ciphertext.len(), 12 + plaintext.len() + 16);
            assert_eq!(decrypt(&key, &ciphertext).unwrap(), plaintext);
        }
    }

    #[test]
    fn test_gcm_tamper_detected() {
        let key = [0x42u8; 32];
        let mut ciphertext = encrypt(&key, b"payload").unwrap();
        ciphertext[20] ^= 0x80;
        assert!(matches!(
            decrypt(&key, &ciphertext),
            Err(Error::AeadAuthentication)
        ));
    }

    #[test]
    fn test_round_trip_every_mode_and_padding() {
        let key = [0x55u8; 32];
        let paddings: [&dyn PaddingScheme; 5] =
            [&Pkcs7, &Pkcs7Strict, &Pkcs5, &AnsiX923, &Iso10126];

        for len in [0usize, 1, 15, 16, 17, 160] {
            let plaintext: Vec<u8> = (1..=len).map(|i| i as u8).collect();

            for padding in paddings {
                let ct = encrypt_ecb_with(&key, &plaintext, padding).unwrap();
                assert_eq!(decrypt_ecb_with(&key, &ct, padding).unwrap(), plaintext);

                let ct = encrypt_cbc_with(&key, &plaintext, padding).unwrap();
                assert_eq!(decrypt_cbc_with(&key, &ct, padding).unwrap(), plaintext);
            }

            // Zero padding: round trip holds because the plaintext has no
            // trailing zero byte (documented scheme limitation).
            let ct = encrypt_cbc_with(&key, &plaintext, &ZeroPadding).unwrap();
            assert_eq!(
                decrypt_cbc_with(&key, &ct, &ZeroPadding).unwrap(),
                plaintext
            );

            let ct = encrypt_cfb(&key, &plaintext).unwrap();
            assert_eq!(decrypt_cfb(&key, &ct).unwrap(), plaintext);

            let ct = encrypt_ctr(&key, &plaintext).unwrap();
            assert_eq!(decrypt_ctr(&key, &ct).unwrap(), plaintext);

            let ct = encrypt_ofb(&key, &plaintext).unwrap();
            assert_eq!(decrypt_ofb(&key, &ct).unwrap(), plaintext);
        }
    }

    #[test]
    fn test_wrong_key_length_rejected_everywhere() {
        let key = [0u8; 20];
        for result in [
            encrypt(&key, b"x"),
            decrypt(&key, &[0u8; 64]),
            encrypt_ecb(&key, b"x"),
            encrypt_cbc(&key, b"x"),
            encrypt_cfb(&key, b"x"),
            encrypt_ctr(&key, b"x"),
            encrypt_ofb(&key, b"x"),
        ] {
            assert!(matches!(result, Err(Error::InvalidKeyLength { .. })));
        }
    }

    #[test]
    fn test_short_ciphertext_rejected() {
        let key = [0u8; 32];
        assert!(matches!(
            decrypt(&key, &[0u8; 11]),
            Err(Error::ShortCiphertext)
        ));
        assert!(matches!(
            decrypt_cbc(&key, &[0u8; 15]),
            Err(Error::ShortCiphertext)
        ));
        assert!(matches!(
            decrypt_cfb(&key, &[0u8; 15]),
            Err(Error::ShortCiphertext)
        ));
    }
}
