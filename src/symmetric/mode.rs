//! Generic cipher-mode execution pipelines
//!
//! Each function here is one `pad -> encrypt -> envelope` (or the inverse)
//! pipeline, generic over the RustCrypto mode type `M` rather than the bare
//! block cipher, so a single pipeline serves every `(cipher, mode)`
//! instantiation. The algorithm wrappers in this crate are thin calls into
//! these functions with a fixed mode type and key-length table.
//!
//! Envelope layout: ECB produces the bare payload; CBC/CFB/CTR/OFB produce
//! `IV || payload` with a fresh random IV per call; AEAD produces
//! `nonce || payload || tag`. The random source is injected, and a read
//! failure surfaces as [`Error::RandomSource`] before any cipher work.
//! No state is retained between calls.

use aes_gcm::aead::{Aead, AeadCore, Nonce};
use cipher::{
    AsyncStreamCipher, Block, BlockDecryptMut, BlockEncryptMut, InnerIvInit, KeyInit, KeyIvInit,
    StreamCipher, StreamCipherCore,
};
use rand_core::CryptoRngCore;

use crate::{
    error::{Error, Result},
    padding::PaddingScheme,
};

/// Fill a fresh IV/nonce buffer from the injected random source.
pub(crate) fn generate_iv(rng: &mut dyn CryptoRngCore, len: usize) -> Result<Vec<u8>> {
    let mut iv = vec![0u8; len];
    rng.try_fill_bytes(&mut iv)
        .map_err(|e| Error::RandomSource(e.to_string()))?;
    Ok(iv)
}

fn init_error(e: cipher::InvalidLength) -> Error {
    Error::CipherInit(e.to_string())
}

/// Encrypt with the bare block cipher applied per block (ECB).
///
/// `M` is the cipher itself here; ECB has no chaining state.
pub fn ecb_encrypt<M>(key: &[u8], plaintext: &[u8], padding: &dyn PaddingScheme) -> Result<Vec<u8>>
where
    M: KeyInit + BlockEncryptMut,
{
    let mut cipher = M::new_from_slice(key).map_err(init_error)?;
    let block_size = M::block_size();

    let mut buf = padding.pad(plaintext, block_size);
    for block in buf.chunks_exact_mut(block_size) {
        cipher.encrypt_block_mut(Block::<M>::from_mut_slice(block));
    }
    Ok(buf)
}

/// Inverse of [`ecb_encrypt`]. Enforces block alignment before decrypting
/// and propagates unpad failures verbatim.
pub fn ecb_decrypt<M>(key: &[u8], ciphertext: &[u8], padding: &dyn PaddingScheme) -> Result<Vec<u8>>
where
    M: KeyInit + BlockDecryptMut,
{
    let block_size = M::block_size();
    if ciphertext.len() % block_size != 0 {
        return Err(Error::NotBlockAligned);
    }

    let mut cipher = M::new_from_slice(key).map_err(init_error)?;
    let mut buf = ciphertext.to_vec();
    for block in buf.chunks_exact_mut(block_size) {
        cipher.decrypt_block_mut(Block::<M>::from_mut_slice(block));
    }
    padding.unpad(&buf)
}

/// CBC encryption: pad, generate a block-size IV, chain, return
/// `IV || ciphertext`. The cipher is constructed before the IV is drawn;
/// a bad key never consumes randomness.
pub fn cbc_encrypt<M>(
    key: &[u8],
    plaintext: &[u8],
    padding: &dyn PaddingScheme,
    rng: &mut dyn CryptoRngCore,
) -> Result<Vec<u8>>
where
    M: InnerIvInit + BlockEncryptMut,
    M::Inner: KeyInit,
{
    let cipher = M::Inner::new_from_slice(key).map_err(init_error)?;
    let block_size = M::block_size();
    let iv = generate_iv(rng, M::iv_size())?;
    let mut mode = M::inner_iv_slice_init(cipher, &iv).map_err(init_error)?;

    let mut out = Vec::with_capacity(iv.len() + plaintext.len() + block_size);
    out.extend_from_slice(&iv);
    out.extend(padding.pad(plaintext, block_size));
    for block in out[iv.len()..].chunks_exact_mut(block_size) {
        mode.encrypt_block_mut(Block::<M>::from_mut_slice(block));
    }
    Ok(out)
}

/// CBC decryption of an `IV || ciphertext` envelope.
pub fn cbc_decrypt<M>(
    key: &[u8],
    ciphertext: &[u8],
    padding: &dyn PaddingScheme,
) -> Result<Vec<u8>>
where
    M: KeyIvInit + BlockDecryptMut,
{
    let iv_size = M::iv_size();
    if ciphertext.len() < iv_size {
        return Err(Error::ShortCiphertext);
    }
    let (iv, payload) = ciphertext.split_at(iv_size);

    let block_size = M::block_size();
    if payload.len() % block_size != 0 {
        return Err(Error::NotBlockAligned);
    }

    let mut mode = M::new_from_slices(key, iv).map_err(init_error)?;
    let mut buf = payload.to_vec();
    for block in buf.chunks_exact_mut(block_size) {
        mode.decrypt_block_mut(Block::<M>::from_mut_slice(block));
    }
    padding.unpad(&buf)
}

/// CFB encryption (full-block feedback): no padding, `IV || ciphertext`.
pub fn cfb_encrypt<M>(key: &[u8], plaintext: &[u8], rng: &mut dyn CryptoRngCore) -> Result<Vec<u8>>
where
    M: InnerIvInit + AsyncStreamCipher + BlockEncryptMut,
    M::Inner: KeyInit,
{
    let cipher = M::Inner::new_from_slice(key).map_err(init_error)?;
    let iv = generate_iv(rng, M::iv_size())?;
    let mode = M::inner_iv_slice_init(cipher, &iv).map_err(init_error)?;

    let mut out = Vec::with_capacity(iv.len() + plaintext.len());
    out.extend_from_slice(&iv);
    out.extend_from_slice(plaintext);
    let iv_len = iv.len();
    mode.encrypt(&mut out[iv_len..]);
    Ok(out)
}

/// CFB decryption of an `IV || ciphertext` envelope.
pub fn cfb_decrypt<M>(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>>
where
    M: KeyIvInit + AsyncStreamCipher + BlockDecryptMut,
{
    let iv_size = M::iv_size();
    if ciphertext.len() < iv_size {
        return Err(Error::ShortCiphertext);
    }
    let (iv, payload) = ciphertext.split_at(iv_size);

    let mode = M::new_from_slices(key, iv).map_err(init_error)?;
    let mut buf = payload.to_vec();
    mode.decrypt(&mut buf);
    Ok(buf)
}

/// Keystream encryption over a block cipher (CTR, OFB): no padding,
/// `IV || ciphertext`. `T` is the mode core, initialized from an
/// already-constructed cipher; the stream wrappers' slice constructor only
/// accepts the maximum key length of variable-key ciphers, so going through
/// the core keeps short Blowfish keys working.
pub fn keystream_encrypt<T>(
    key: &[u8],
    plaintext: &[u8],
    rng: &mut dyn CryptoRngCore,
) -> Result<Vec<u8>>
where
    T: StreamCipherCore + InnerIvInit,
    T::Inner: KeyInit,
{
    let cipher = T::Inner::new_from_slice(key).map_err(init_error)?;
    let iv = generate_iv(rng, T::iv_size())?;
    let core = T::inner_iv_slice_init(cipher, &iv).map_err(init_error)?;

    let mut out = Vec::with_capacity(iv.len() + plaintext.len());
    out.extend_from_slice(&iv);
    out.extend_from_slice(plaintext);
    let iv_len = iv.len();
    core.try_apply_keystream_partial((&mut out[iv_len..]).into())
        .map_err(|e| Error::CipherInit(e.to_string()))?;
    Ok(out)
}

/// Inverse of [`keystream_encrypt`].
pub fn keystream_decrypt<T>(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>>
where
    T: StreamCipherCore + InnerIvInit,
    T::Inner: KeyInit,
{
    let iv_size = T::iv_size();
    if ciphertext.len() < iv_size {
        return Err(Error::ShortCiphertext);
    }
    let (iv, payload) = ciphertext.split_at(iv_size);

    let cipher = T::Inner::new_from_slice(key).map_err(init_error)?;
    let core = T::inner_iv_slice_init(cipher, iv).map_err(init_error)?;
    let mut buf = payload.to_vec();
    core.try_apply_keystream_partial(buf.as_mut_slice().into())
        .map_err(|e| Error::CipherInit(e.to_string()))?;
    Ok(buf)
}

/// Keystream encryption for native stream ciphers (ChaCha20): no padding,
/// `nonce || ciphertext`.
pub fn stream_encrypt<M>(
    key: &[u8],
    plaintext: &[u8],
    rng: &mut dyn CryptoRngCore,
) -> Result<Vec<u8>>
where
    M: KeyIvInit + StreamCipher,
{
    let iv = generate_iv(rng, M::iv_size())?;
    let mut mode = M::new_from_slices(key, &iv).map_err(init_error)?;

    let mut out = Vec::with_capacity(iv.len() + plaintext.len());
    out.extend_from_slice(&iv);
    out.extend_from_slice(plaintext);
    let iv_len = iv.len();
    mode.try_apply_keystream(&mut out[iv_len..])
        .map_err(|e| Error::CipherInit(e.to_string()))?;
    Ok(out)
}

/// Inverse of [`stream_encrypt`].
pub fn stream_decrypt<M>(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>>
where
    M: KeyIvInit + StreamCipher,
{
    let iv_size = M::iv_size();
    if ciphertext.len() < iv_size {
        return Err(Error::ShortCiphertext);
    }
    let (iv, payload) = ciphertext.split_at(iv_size);

    let mut mode = M::new_from_slices(key, iv).map_err(init_error)?;
    let mut buf = payload.to_vec();
    mode.try_apply_keystream(&mut buf)
        .map_err(|e| Error::CipherInit(e.to_string()))?;
    Ok(buf)
}

/// AEAD seal: generate a nonce, encrypt-and-authenticate, return
/// `nonce || ciphertext || tag`.
pub fn aead_seal<A>(key: &[u8], plaintext: &[u8], rng: &mut dyn CryptoRngCore) -> Result<Vec<u8>>
where
    A: Aead + AeadCore + KeyInit,
{
    let cipher = A::new_from_slice(key).map_err(init_error)?;

    let mut nonce = Nonce::<A>::default();
    rng.try_fill_bytes(nonce.as_mut_slice())
        .map_err(|e| Error::RandomSource(e.to_string()))?;

    let ciphertext = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|_| Error::AeadSeal)?;

    let mut out = Vec::with_capacity(nonce.len() + ciphertext.len());
    out.extend_from_slice(&nonce);
    out.extend_from_slice(&ciphertext);
    Ok(out)
}

/// AEAD open of a `nonce || ciphertext || tag` envelope. A tag mismatch
/// surfaces as [`Error::AeadAuthentication`], never as silent acceptance.
pub fn aead_open<A>(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>>
where
    A: Aead + AeadCore + KeyInit,
{
    let cipher = A::new_from_slice(key).map_err(init_error)?;

    let nonce_size = Nonce::<A>::default().len();
    if ciphertext.len() < nonce_size {
        return Err(Error::ShortCiphertext);
    }
    let (nonce, payload) = ciphertext.split_at(nonce_size);

    cipher
        .decrypt(Nonce::<A>::from_slice(nonce), payload)
        .map_err(|_| Error::AeadAuthentication)
}
