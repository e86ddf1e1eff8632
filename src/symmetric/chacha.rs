//! ChaCha20 pipelines
//!
//! [`encrypt`]/[`decrypt`] are the authenticated ChaCha20-Poly1305 pair and
//! the right default. The unauthenticated stream variants exist for callers
//! that carry their own integrity layer; they detect nothing.

use chacha20::ChaCha20;
use chacha20poly1305::{
    aead::{Aead, KeyInit},
    ChaCha20Poly1305, Nonce,
};
use cipher::{KeyIvInit, StreamCipher};
use rand_core::OsRng;

use super::mode;
use crate::{
    algorithm::Algorithm,
    error::{Error, Result},
};

/// Nonce size shared by ChaCha20 (IETF) and ChaCha20-Poly1305.
pub const NONCE_SIZE: usize = 12;

fn check_nonce(nonce: &[u8]) -> Result<()> {
    if nonce.len() != NONCE_SIZE {
        return Err(Error::InvalidNonceLength {
            expected: NONCE_SIZE,
        });
    }
    Ok(())
}

/// Encrypt with ChaCha20-Poly1305; returns `nonce || ciphertext || tag`.
pub fn encrypt(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    Algorithm::ChaCha20.validate_key(key)?;
    mode::aead_seal::<ChaCha20Poly1305>(key, plaintext, &mut OsRng)
}

/// Decrypt a ChaCha20-Poly1305 envelope produced by [`encrypt`].
pub fn decrypt(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    Algorithm::ChaCha20.validate_key(key)?;
    mode::aead_open::<ChaCha20Poly1305>(key, ciphertext)
}

/// Encrypt with the bare ChaCha20 stream; returns `nonce || ciphertext`.
/// No authentication.
pub fn encrypt_stream(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    Algorithm::ChaCha20.validate_key(key)?;
    mode::stream_encrypt::<ChaCha20>(key, plaintext, &mut OsRng)
}

/// Decrypt a bare-stream `nonce || ciphertext` envelope.
pub fn decrypt_stream(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    Algorithm::ChaCha20.validate_key(key)?;
    mode::stream_decrypt::<ChaCha20>(key, ciphertext)
}

/// Apply the ChaCha20 keystream for a caller-supplied nonce. Symmetric:
/// the same call encrypts and decrypts. Nothing is prepended.
pub fn apply_keystream(key: &[u8], nonce: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    Algorithm::ChaCha20.validate_key(key)?;
    check_nonce(nonce)?;

    let mut cipher =
        ChaCha20::new_from_slices(key, nonce).map_err(|e| Error::CipherInit(e.to_string()))?;
    let mut buf = data.to_vec();
    cipher
        .try_apply_keystream(&mut buf)
        .map_err(|e| Error::CipherInit(e.to_string()))?;
    Ok(buf)
}

/// Seal with ChaCha20-Poly1305 under a caller-supplied nonce; returns
/// `ciphertext || tag` with nothing prepended. The nonce must never repeat
/// under the same key.
pub fn seal_with_nonce(key: &[u8], nonce: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    Algorithm::ChaCha20.validate_key(key)?;
    check_nonce(nonce)?;

    let cipher =
        ChaCha20Poly1305::new_from_slice(key).map_err(|e| Error::CipherInit(e.to_string()))?;
    cipher
        .encrypt(Nonce::from_slice(nonce), plaintext)
        .map_err(|_| Error::AeadSeal)
}

/// Open a `ciphertext || tag` buffer sealed under a caller-supplied nonce.
pub fn open_with_nonce(key: &[u8], nonce: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    Algorithm::ChaCha20.validate_key(key)?;
    check_nonce(nonce)?;

    let cipher =
        ChaCha20Poly1305::new_from_slice(key).map_err(|e| Error::CipherInit(e.to_string()))?;
    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| Error::AeadAuthentication)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aead_round_trip_and_tamper() {
        let key = [0u8; 32];
        let plaintext = b"Hello, ChaCha20-Poly1305!";

        let mut ciphertext = encrypt(&key, plaintext).unwrap();
        assert_eq!(ciphertext.len(), NONCE_SIZE + plaintext.len() + 16);
        assert_eq!(decrypt(&key, &ciphertext).unwrap(), plaintext);

        ciphertext[NONCE_SIZE] ^= 1;
        assert!(matches!(
            decrypt(&key, &ciphertext),
            Err(Error::AeadAuthentication)
        ));
    }

    #[test]
    fn test_stream_round_trip() {
        let key = [7u8; 32];
        for len in [0usize, 1, 63, 64, 65, 640] {
            let plaintext: Vec<u8> = (0..len).map(|i| i as u8).collect();
            let ciphertext = encrypt_stream(&key, &plaintext).unwrap();
            assert_eq!(ciphertext.len(), NONCE_SIZE + len);
            assert_eq!(decrypt_stream(&key, &ciphertext).unwrap(), plaintext);
        }
    }

    #[test]
    fn test_apply_keystream_is_symmetric() {
        let key = [9u8; 32];
        let nonce = [1u8; 12];
        let data = b"symmetric keystream";

        let ciphertext = apply_keystream(&key, &nonce, data).unwrap();
        assert_ne!(&ciphertext, data);
        assert_eq!(apply_keystream(&key, &nonce, &ciphertext).unwrap(), data);
    }

    #[test]
    fn test_with_nonce_seal_open() {
        let key = [3u8; 32];
        let nonce = [5u8; 12];
        let plaintext = b"explicit nonce";

        let sealed = seal_with_nonce(&key, &nonce, plaintext).unwrap();
        assert_eq!(sealed.len(), plaintext.len() + 16);
        assert_eq!(open_with_nonce(&key, &nonce, &sealed).unwrap(), plaintext);

        // Opening under a different nonce must fail authentication.
        let other = [6u8; 12];
        assert!(matches!(
            open_with_nonce(&key, &other, &sealed),
            Err(Error::AeadAuthentication)
        ));
    }

    #[test]
    fn test_nonce_and_key_validation() {
        assert!(matches!(
            apply_keystream(&[0u8; 32], &[0u8; 8], b"x"),
            Err(Error::InvalidNonceLength { expected: 12 })
        ));
        assert!(matches!(
            seal_with_nonce(&[0u8; 31], &[0u8; 12], b"x"),
            Err(Error::InvalidKeyLength { .. })
        ));
        assert!(matches!(
            decrypt_stream(&[0u8; 32], &[0u8; 11]),
            Err(Error::ShortCiphertext)
        ));
    }
}
