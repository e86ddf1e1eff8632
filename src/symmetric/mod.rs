//! Symmetric cipher pipelines
//!
//! Algorithm wrappers (AES, DES, 3DES, Blowfish, ChaCha20) are thin
//! instantiations of the generic pipelines in [`mode`]; they contribute
//! key-length validation and nothing else. The [`legacy`] module carries the
//! hex-encoded compatibility surface.

pub mod aes;
pub mod blowfish;
pub mod chacha;
pub mod des;
pub mod legacy;
pub mod mode;

/// Key-length dispatch to the three AES variants. The match arms are the
/// AES key rule; anything else is rejected before any cipher work.
macro_rules! dispatch_aes {
    ($key:expr, $cipher:ident => $body:expr) => {
        match $key.len() {
            16 => {
                type $cipher = ::aes::Aes128;
                $body
            }
            24 => {
                type $cipher = ::aes::Aes192;
                $body
            }
            32 => {
                type $cipher = ::aes::Aes256;
                $body
            }
            _ => Err(crate::algorithm::Algorithm::Aes.key_length_error()),
        }
    };
}
pub(crate) use dispatch_aes;
