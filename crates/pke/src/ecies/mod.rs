//! Elliptic Curve Integrated Encryption Scheme over a [`CurveGroup`].
//!
//! Encryption draws `r`, publishes `R = r·G`, hashes the shared point
//! `S = r·Q` into a key and IV, and encrypts with the configured
//! [`SymmetricCipher`]. Decryption recomputes `S = k·R`.

use log::{debug, warn};
use monecc_algorithms::{derive_key_material, Aes128CbcHmacSha256, CurveGroup, Point};
use monecc_api::{Pke, Result as CoreResult, ScalarSource, SymmetricCipher};

use crate::agreement::derive_shared;
use crate::config::EciesConfig;
use crate::error::{Error, Result};
use crate::keypair::{draw_until, KeyPairService};
use crate::keys::{KeyPair, PrivateKey, PublicKey};

mod message;
pub use message::EciesMessage;

/// ECIES instance: a curve group, draw bounds and a symmetric cipher.
///
/// The default cipher authenticates the ciphertext, so any modification is
/// reported as `DecryptionFailed`. [`monecc_algorithms::Aes128Cbc`] gives
/// output readable by earlier monECC releases but only detects damage that
/// breaks the padding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ecies<C = Aes128CbcHmacSha256> {
    group: CurveGroup,
    config: EciesConfig,
    cipher: C,
}

impl Ecies {
    /// Scheme over `group` with the default authenticated cipher
    pub fn new(group: CurveGroup, config: EciesConfig) -> CoreResult<Self> {
        Self::with_cipher(group, config, Aes128CbcHmacSha256::new())
    }

    /// The demonstration curve with default bounds
    pub fn demo() -> Self {
        Self {
            group: CurveGroup::demo(),
            config: EciesConfig::default(),
            cipher: Aes128CbcHmacSha256::new(),
        }
    }
}

impl Default for Ecies {
    fn default() -> Self {
        Self::demo()
    }
}

impl<C: SymmetricCipher> Ecies<C> {
    /// Scheme with an explicit symmetric cipher
    pub fn with_cipher(group: CurveGroup, config: EciesConfig, cipher: C) -> CoreResult<Self> {
        config.validate()?;
        Ok(Self {
            group,
            config,
            cipher,
        })
    }

    /// The curve group
    pub fn group(&self) -> &CurveGroup {
        &self.group
    }

    /// The draw bounds
    pub fn config(&self) -> &EciesConfig {
        &self.config
    }

    /// The symmetric cipher
    pub fn cipher(&self) -> &C {
        &self.cipher
    }

    /// Generate a key pair with `k` in `[1, max_private_scalar]`
    pub fn generate_keypair<S: ScalarSource + ?Sized>(&self, source: &mut S) -> CoreResult<KeyPair> {
        Ok(KeyPairService::new(&self.group)
            .with_max_attempts(self.config.max_keygen_attempts)
            .generate(self.config.max_private_scalar, source)?)
    }

    /// Encrypt `plaintext` for `recipient`.
    ///
    /// Ephemeral scalars whose `R` or `S` would be the identity are redrawn,
    /// at most `max_keygen_attempts` times.
    pub fn encrypt<S: ScalarSource + ?Sized>(
        &self,
        recipient: &PublicKey,
        plaintext: &[u8],
        source: &mut S,
    ) -> CoreResult<EciesMessage> {
        Ok(self.seal(recipient, plaintext, source)?)
    }

    /// Decrypt `message` with `private`
    pub fn decrypt(&self, private: &PrivateKey, message: &EciesMessage) -> CoreResult<Vec<u8>> {
        Ok(self.open(private, message)?)
    }

    /// Encrypt a UTF-8 string
    pub fn encrypt_str<S: ScalarSource + ?Sized>(
        &self,
        recipient: &PublicKey,
        text: &str,
        source: &mut S,
    ) -> CoreResult<EciesMessage> {
        self.encrypt(recipient, text.as_bytes(), source)
    }

    /// Decrypt to a string, failing if the plaintext is not UTF-8
    pub fn decrypt_to_string(
        &self,
        private: &PrivateKey,
        message: &EciesMessage,
    ) -> CoreResult<String> {
        let plaintext = self.decrypt(private, message)?;
        String::from_utf8(plaintext)
            .map_err(|_| Error::DecryptionFailed("plaintext is not valid UTF-8").into())
    }

    fn seal<S: ScalarSource + ?Sized>(
        &self,
        recipient: &PublicKey,
        plaintext: &[u8],
        source: &mut S,
    ) -> Result<EciesMessage> {
        let q = recipient.point();
        if q.is_identity() || !self.group.contains(&q) {
            return Err(Error::InvalidPublicKey(
                "recipient key is not a finite point of this curve",
            ));
        }

        let group = &self.group;
        let (ephemeral, shared) = draw_until(
            source,
            self.config.ephemeral_bound,
            self.config.max_keygen_attempts,
            "ephemeral scalar",
            |r| {
                let ephemeral = group.mul_generator(r)?;
                let shared = derive_shared(group, r, &q)?;
                if ephemeral.is_identity() || shared.is_identity() {
                    return Ok(None);
                }
                Ok(Some((ephemeral, shared)))
            },
        )?;

        let material = derive_key_material(&shared)?;
        let ciphertext = self
            .cipher
            .encrypt(plaintext, material.key(), material.iv())?;
        debug!(
            "{}: sealed {} bytes into {} bytes",
            self.cipher.name(),
            plaintext.len(),
            ciphertext.len()
        );
        Ok(EciesMessage::new(ephemeral, ciphertext)?)
    }

    fn open(&self, private: &PrivateKey, message: &EciesMessage) -> Result<Vec<u8>> {
        let ephemeral: Point = message.ephemeral();
        if !self.group.contains(&ephemeral) {
            return Err(Error::InvalidPublicKey("ephemeral point is not on the curve"));
        }

        let shared = derive_shared(&self.group, private.expose_scalar(), &ephemeral)?;
        if shared.is_identity() {
            warn!("ECIES decrypt: shared point is the identity, refusing to derive a key");
            return Err(Error::InvalidSharedSecret("ECIES decrypt"));
        }

        let material = derive_key_material(&shared)?;
        Ok(self
            .cipher
            .decrypt(message.ciphertext(), material.key(), material.iv())?)
    }
}

impl<C: SymmetricCipher> Pke for Ecies<C> {
    type PublicKey = PublicKey;
    type SecretKey = PrivateKey;
    type Ciphertext = EciesMessage;

    fn name(&self) -> &'static str {
        "ECIES-monECC-SHA256"
    }

    fn keypair<S: ScalarSource + ?Sized>(
        &self,
        source: &mut S,
    ) -> CoreResult<(Self::PublicKey, Self::SecretKey)> {
        let (private, public) = self.generate_keypair(source)?.into_parts();
        Ok((public, private))
    }

    fn encrypt<S: ScalarSource + ?Sized>(
        &self,
        pk_recipient: &Self::PublicKey,
        plaintext: &[u8],
        source: &mut S,
    ) -> CoreResult<Self::Ciphertext> {
        Ok(self.seal(pk_recipient, plaintext, source)?)
    }

    fn decrypt(
        &self,
        sk_recipient: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> CoreResult<Vec<u8>> {
        Ok(self.open(sk_recipient, ciphertext)?)
    }
}
