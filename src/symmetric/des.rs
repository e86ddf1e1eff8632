//! DES and Triple-DES pipelines
//!
//! DES is kept for compatibility only; its 56-bit key is far too small for
//! new data. The [`triple`] submodule carries 3DES (EDE, 24-byte key) with
//! the same mode surface.

use des::{Des, TdesEde3};
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
    Algorithm::Des.validate_key(key)?;
    mode::ecb_encrypt::<Des>(key, plaintext, padding)
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
    Algorithm::Des.validate_key(key)?;
    mode::ecb_decrypt::<Des>(key, ciphertext, padding)
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
    Algorithm::Des.validate_key(key)?;
    mode::cbc_encrypt::<cbc::Encryptor<Des>>(key, plaintext, padding, &mut OsRng)
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
    Algorithm::Des.validate_key(key)?;
    mode::cbc_decrypt::<cbc::Decryptor<Des>>(key, ciphertext, padding)
}

/// Decrypt a CBC `IV || ciphertext` envelope with PKCS#7 padding.
pub fn decrypt_cbc(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    decrypt_cbc_with(key, ciphertext, &Pkcs7)
}

/// Encrypt in CFB mode; returns `IV || ciphertext`, no padding.
pub fn encrypt_cfb(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    Algorithm::Des.validate_key(key)?;
    mode::cfb_encrypt::<cfb_mode::Encryptor<Des>>(key, plaintext, &mut OsRng)
}

/// Decrypt a CFB `IV || ciphertext` envelope.
pub fn decrypt_cfb(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    Algorithm::Des.validate_key(key)?;
    mode::cfb_decrypt::<cfb_mode::Decryptor<Des>>(key, ciphertext)
}

/// Encrypt in CTR mode; returns `IV || ciphertext`, no padding.
pub fn encrypt_ctr(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    Algorithm::Des.validate_key(key)?;
    mode::keystream_encrypt::<ctr::CtrCore<Des, ctr::flavors::Ctr64BE>>(key, plaintext, &mut OsRng)
}

/// Decrypt a CTR `IV || ciphertext` envelope.
pub fn decrypt_ctr(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    Algorithm::Des.validate_key(key)?;
    mode::keystream_decrypt::<ctr::CtrCore<Des, ctr::flavors::Ctr64BE>>(key, ciphertext)
}

/// Encrypt in OFB mode; returns `IV || ciphertext`, no padding.
pub fn encrypt_ofb(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    Algorithm::Des.validate_key(key)?;
    mode::keystream_encrypt::<ofb::OfbCore<Des>>(key, plaintext, &mut OsRng)
}

/// Decrypt an OFB `IV || ciphertext` envelope.
pub fn decrypt_ofb(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    Algorithm::Des.validate_key(key)?;
    mode::keystream_decrypt::<ofb::OfbCore<Des>>(key, ciphertext)
}

/// Triple-DES (EDE) with a 24-byte key.
pub mod triple {
    use super::*;

    pub fn encrypt_ecb_with(
        key: &[u8],
        plaintext: &[u8],
        padding: &dyn PaddingScheme,
    ) -> Result<Vec<u8>> {
        Algorithm::TripleDes.validate_key(key)?;
        mode::ecb_encrypt::<TdesEde3>(key, plaintext, padding)
    }

    pub fn encrypt_ecb(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        encrypt_ecb_with(key, plaintext, &Pkcs7)
    }

    pub fn decrypt_ecb_with(
        key: &[u8],
        ciphertext: &[u8],
        padding: &dyn PaddingScheme,
    ) -> Result<Vec<u8>> {
        Algorithm::TripleDes.validate_key(key)?;
        mode::ecb_decrypt::<TdesEde3>(key, ciphertext, padding)
    }

    pub fn decrypt_ecb(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        decrypt_ecb_with(key, ciphertext, &Pkcs7)
    }

    pub fn encrypt_cbc_with(
        key: &[u8],
        plaintext: &[u8],
        padding: &dyn PaddingScheme,
    ) -> Result<Vec<u8>> {
        Algorithm::TripleDes.validate_key(key)?;
        mode::cbc_encrypt::<cbc::Encryptor<TdesEde3>>(key, plaintext, padding, &mut OsRng)
    }

    pub fn encrypt_cbc(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        encrypt_cbc_with(key, plaintext, &Pkcs7)
    }

    pub fn decrypt_cbc_with(
        key: &[u8],
        ciphertext: &[u8],
        padding: &dyn PaddingScheme,
    ) -> Result<Vec<u8>> {
        Algorithm::TripleDes.validate_key(key)?;
        mode::cbc_decrypt::<cbc::Decryptor<TdesEde3>>(key, ciphertext, padding)
    }

    pub fn decrypt_cbc(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        decrypt_cbc_with(key, ciphertext, &Pkcs7)
    }

    pub fn encrypt_cfb(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        Algorithm::TripleDes.validate_key(key)?;
        mode::cfb_encrypt::<cfb_mode::Encryptor<TdesEde3>>(key, plaintext, &mut OsRng)
    }

    pub fn decrypt_cfb(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        Algorithm::TripleDes.validate_key(key)?;
        mode::cfb_decrypt::<cfb_mode::Decryptor<TdesEde3>>(key, ciphertext)
    }

    pub fn encrypt_ctr(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        Algorithm::TripleDes.validate_key(key)?;
        mode::keystream_encrypt::<ctr::CtrCore<TdesEde3, ctr::flavors::Ctr64BE>>(key, plaintext, &mut OsRng)
    }

    pub fn decrypt_ctr(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        Algorithm::TripleDes.validate_key(key)?;
        mode::keystream_decrypt::<ctr::CtrCore<TdesEde3, ctr::flavors::Ctr64BE>>(key, ciphertext)
    }

    pub fn encrypt_ofb(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        Algorithm::TripleDes.validate_key(key)?;
        mode::keystream_encrypt::<ofb::OfbCore<TdesEde3>>(key, plaintext, &mut OsRng)
    }

    pub fn decrypt_ofb(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        Algorithm::TripleDes.validate_key(key)?;
        mode::keystream_decrypt::<ofb::OfbCore<TdesEde3>>(key, ciphertext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::Error, padding::AnsiX923};

    #[test]
    fn test_des_round_trip_all_modes() {
        let key = [0x13u8; 8];
        for len in [0usize, 1, 7, 8, 9, 80] {
            let plaintext: Vec<u8> = (1..=len).map(|i| i as u8).collect();

            let ct = encrypt_ecb(&key, &plaintext).unwrap();
            assert_eq!(decrypt_ecb(&key, &ct).unwrap(), plaintext);

            let ct = encrypt_cbc(&key, &plaintext).unwrap();
            assert_eq!((ct.len() - 8) % 8, 0);
            assert_eq!(decrypt_cbc(&key, &ct).unwrap(), plaintext);

            let ct = encrypt_cfb(&key, &plaintext).unwrap();
            assert_eq!(ct.len(), 8 + plaintext.len());
            assert_eq!(decrypt_cfb(&key, &ct).unwrap(), plaintext);

            let ct = encrypt_ctr(&key, &plaintext).unwrap();
            assert_eq!(decrypt_ctr(&key, &ct).unwrap(), plaintext);

            let ct = encrypt_ofb(&key, &plaintext).unwrap();
            assert_eq!(decrypt_ofb(&key, &ct).unwrap(), plaintext);
        }
    }

    #[test]
    fn test_triple_des_round_trip() {
        let key = [0x31u8; 24];
        let plaintext = b"three keys walk into a bar";

        let ct = triple::encrypt_ecb(&key, plaintext).unwrap();
        assert_eq!(triple::decrypt_ecb(&key, &ct).unwrap(), plaintext);

        let ct = triple::encrypt_cbc(&key, plaintext).unwrap();
        assert_eq!(triple::decrypt_cbc(&key, &ct).unwrap(), plaintext);

        let ct = triple::encrypt_cfb(&key, plaintext).unwrap();
        assert_eq!(triple::decrypt_cfb(&key, &ct).unwrap(), plaintext);

        let ct = triple::encrypt_ctr(&key, plaintext).unwrap();
        assert_eq!(triple::decrypt_ctr(&key, &ct).unwrap(), plaintext);

        let ct = triple::encrypt_ofb(&key, plaintext).unwrap();
        assert_eq!(triple::decrypt_ofb(&key, &ct).unwrap(), plaintext);
    }

    #[test]
    fn test_alternate_padding() {
        let key = [0x13u8; 8];
        let plaintext = b"ansi padded";
        let ct = encrypt_cbc_with(&key, plaintext, &AnsiX923).unwrap();
        assert_eq!(
            decrypt_cbc_with(&key, &ct, &AnsiX923).unwrap(),
            plaintext
        );
    }

    #[test]
    fn test_key_length_enforced() {
        let err = encrypt_cbc(&[0u8; 7], b"x").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid key length: must be 8 bytes for DES"
        );

        let err = triple::encrypt_cbc(&[0u8; 8], b"x").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid key length: must be 24 bytes for 3DES"
        );
    }

    #[test]
    fn test_decrypt_error_ladder() {
        let key = [0x13u8; 8];
        assert!(matches!(
            decrypt_cbc(&key, &[0u8; 7]),
            Err(Error::ShortCiphertext)
        ));
        assert!(matches!(
            decrypt_cbc(&key, &[0u8; 8 + 5]),
            Err(Error::NotBlockAligned)
        ));
        assert!(matches!(
            decrypt_ecb(&key, &[0u8; 9]),
            Err(Error::NotBlockAligned)
        ));
    }
}
