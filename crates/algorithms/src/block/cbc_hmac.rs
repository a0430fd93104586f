//! AES-128-CBC with an HMAC-SHA256 tag (encrypt-then-MAC)

use hkdf::Hkdf;
use hmac::{Hmac, Mac};
use log::debug;
use monecc_api::{Result as CoreResult, SymmetricCipher};
use monecc_params::traditional::ecies::{
    AES128_KEY_SIZE, AES_BLOCK_SIZE, CBC_IV_SIZE, HMAC_SHA256_TAG_SIZE,
};
use sha2::Sha256;
use zeroize::Zeroizing;

use super::cbc::{decrypt_padded, encrypt_padded};
use crate::error::{to_core_result, validate, Error, Result};

type HmacSha256 = Hmac<Sha256>;

const MAC_KEY_INFO: &[u8] = b"monecc aes-128-cbc hmac-sha256 mac key";
const MAC_KEY_SIZE: usize = 32;

/// AES-128-CBC followed by an HMAC-SHA256 tag over `iv ∥ ciphertext`.
///
/// Output layout: `ciphertext ∥ tag` with a 32-byte tag. The MAC key is
/// expanded from the cipher key with HKDF-SHA256, salted with the IV, so
/// callers keep handing over a single 16-byte key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Aes128CbcHmacSha256;

impl Aes128CbcHmacSha256 {
    /// Create the cipher
    pub fn new() -> Self {
        Self
    }

    fn mac(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<HmacSha256> {
        let hk = Hkdf::<Sha256>::new(Some(iv), key);
        let mut mac_key = Zeroizing::new([0u8; MAC_KEY_SIZE]);
        hk.expand(MAC_KEY_INFO, &mut mac_key[..])
            .map_err(|_| Error::Other("HKDF output length rejected"))?;

        let mut mac = <HmacSha256 as Mac>::new_from_slice(&mac_key[..])
            .map_err(|_| Error::param("HMAC-SHA256", "invalid key length"))?;
        mac.update(iv);
        mac.update(ciphertext);
        Ok(mac)
    }

    fn seal(plaintext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        let mut out = encrypt_padded(plaintext, key, iv)?;
        let tag = Self::mac(key, iv, &out)?.finalize().into_bytes();
        out.extend_from_slice(&tag);
        Ok(out)
    }

    fn open(sealed: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        validate::length("AES-128 key", key.len(), AES128_KEY_SIZE)?;
        validate::length("CBC initialization vector", iv.len(), CBC_IV_SIZE)?;
        if sealed.len() < AES_BLOCK_SIZE + HMAC_SHA256_TAG_SIZE {
            return Err(Error::Decryption {
                algorithm: "AES-128-CBC-HMAC-SHA256",
                details: "ciphertext too short",
            });
        }

        let (ciphertext, tag) = sealed.split_at(sealed.len() - HMAC_SHA256_TAG_SIZE);
        Self::mac(key, iv, ciphertext)?.verify_slice(tag).map_err(|_| {
            debug!("AES-128-CBC-HMAC-SHA256 tag mismatch");
            Error::Decryption {
                algorithm: "AES-128-CBC-HMAC-SHA256",
                details: "authentication tag mismatch",
            }
        })?;

        decrypt_padded(ciphertext, key, iv)
    }
}

impl SymmetricCipher for Aes128CbcHmacSha256 {
    const KEY_SIZE: usize = AES128_KEY_SIZE;
    const IV_SIZE: usize = CBC_IV_SIZE;

    fn name(&self) -> &'static str {
        "AES-128-CBC-HMAC-SHA256"
    }

    fn encrypt(&self, plaintext: &[u8], key: &[u8], iv: &[u8]) -> CoreResult<Vec<u8>> {
        to_core_result(Self::seal(plaintext, key, iv), "AES-128-CBC-HMAC-SHA256 encryption")
    }

    fn decrypt(&self, ciphertext: &[u8], key: &[u8], iv: &[u8]) -> CoreResult<Vec<u8>> {
        to_core_result(Self::open(ciphertext, key, iv), "AES-128-CBC-HMAC-SHA256 decryption")
    }
}
