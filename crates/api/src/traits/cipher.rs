//! Trait definition for the symmetric layer of the hybrid scheme.

use crate::error::Result;

/// A block cipher in a chained mode with byte-oriented padding.
///
/// The public-key core only relies on two things: `decrypt` inverts
/// `encrypt` for the same key and IV, and `decrypt` fails with
/// [`Error::DecryptionFailed`](crate::Error::DecryptionFailed) instead of
/// returning garbage when the input was produced under another key or IV,
/// or was modified in transit.
pub trait SymmetricCipher {
    /// Required key length in bytes.
    const KEY_SIZE: usize;

    /// Required initialization vector length in bytes.
    const IV_SIZE: usize;

    /// Returns the cipher's name, used in scheme names and error contexts.
    fn name(&self) -> &'static str;

    /// Encrypts and pads `plaintext` under `key` and `iv`.
    fn encrypt(&self, plaintext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>>;

    /// Decrypts `ciphertext`, checks it and removes the padding.
    fn decrypt(&self, ciphertext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>>;
}
