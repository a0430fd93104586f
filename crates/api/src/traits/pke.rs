//! Trait definition for Public Key Encryption (PKE) schemes.

use crate::error::Result;
use crate::traits::rng::ScalarSource;
use zeroize::Zeroize;

/// Trait for Public Key Encryption schemes.
///
/// Unlike schemes over standardized curves, a monecc scheme is an instance
/// value: it owns its curve group and its configuration, so every operation
/// takes `&self`.
pub trait Pke {
    /// Public key type for the PKE scheme.
    type PublicKey: Clone;

    /// Secret key type for the PKE scheme.
    type SecretKey: Zeroize;

    /// Ciphertext type produced by the PKE scheme.
    type Ciphertext: Clone;

    /// Returns the PKE algorithm name.
    fn name(&self) -> &'static str;

    /// Generates a new key pair for the PKE scheme.
    fn keypair<S: ScalarSource + ?Sized>(
        &self,
        source: &mut S,
    ) -> Result<(Self::PublicKey, Self::SecretKey)>;

    /// Encrypts a plaintext message using the recipient's public key.
    ///
    /// # Arguments
    /// * `pk_recipient` - The recipient's public key.
    /// * `plaintext` - The message to encrypt.
    /// * `source` - Entropy for the ephemeral scalar.
    fn encrypt<S: ScalarSource + ?Sized>(
        &self,
        pk_recipient: &Self::PublicKey,
        plaintext: &[u8],
        source: &mut S,
    ) -> Result<Self::Ciphertext>;

    /// Decrypts a ciphertext using the recipient's secret key.
    fn decrypt(&self, sk_recipient: &Self::SecretKey, ciphertext: &Self::Ciphertext)
        -> Result<Vec<u8>>;
}
