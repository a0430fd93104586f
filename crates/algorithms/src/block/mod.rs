//! Block cipher modes used as the symmetric layer of the hybrid scheme
//!
//! Both ciphers run AES-128 in CBC mode with PKCS#7 padding:
//!
//! - [`Aes128Cbc`] is the bare mode, byte-compatible with ciphertexts of
//!   earlier monECC releases. It only notices tampering when the padding
//!   breaks, so a modified ciphertext can decrypt to wrong plaintext.
//! - [`Aes128CbcHmacSha256`] appends an HMAC-SHA256 tag over `iv ∥ ciphertext`
//!   (encrypt-then-MAC) and rejects every modified byte.

mod cbc;
mod cbc_hmac;

pub use self::cbc::Aes128Cbc;
pub use self::cbc_hmac::Aes128CbcHmacSha256;
