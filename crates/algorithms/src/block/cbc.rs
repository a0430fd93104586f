//! AES-128-CBC with PKCS#7 padding

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use log::debug;
use monecc_api::{Result as CoreResult, SymmetricCipher};
use monecc_params::traditional::ecies::{AES128_KEY_SIZE, AES_BLOCK_SIZE, CBC_IV_SIZE};

use crate::error::{to_core_result, validate, Error, Result};

type Aes128CbcEnc = ::cbc::Encryptor<aes::Aes128>;
type Aes128CbcDec = ::cbc::Decryptor<aes::Aes128>;

/// Pad and encrypt `plaintext`
pub(crate) fn encrypt_padded(plaintext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
    validate::length("AES-128 key", key.len(), AES128_KEY_SIZE)?;
    validate::length("CBC initialization vector", iv.len(), CBC_IV_SIZE)?;

    let encryptor = Aes128CbcEnc::new_from_slices(key, iv)
        .map_err(|_| Error::param("AES-128-CBC", "invalid key or IV length"))?;
    Ok(encryptor.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

/// Decrypt `ciphertext` and strip the padding
pub(crate) fn decrypt_padded(ciphertext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
    validate::length("AES-128 key", key.len(), AES128_KEY_SIZE)?;
    validate::length("CBC initialization vector", iv.len(), CBC_IV_SIZE)?;

    if ciphertext.is_empty() || ciphertext.len() % AES_BLOCK_SIZE != 0 {
        return Err(Error::Decryption {
            algorithm: "AES-128-CBC",
            details: "ciphertext is not a whole number of blocks",
        });
    }

    let decryptor = Aes128CbcDec::new_from_slices(key, iv)
        .map_err(|_| Error::param("AES-128-CBC", "invalid key or IV length"))?;
    decryptor
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| {
            debug!("AES-128-CBC rejected ciphertext padding");
            Error::Decryption {
                algorithm: "AES-128-CBC",
                details: "invalid padding",
            }
        })
}

/// AES-128 in CBC mode with PKCS#7 padding, no integrity check
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Aes128Cbc;

impl Aes128Cbc {
    /// Create the cipher
    pub fn new() -> Self {
        Self
    }
}

impl SymmetricCipher for Aes128Cbc {
    const KEY_SIZE: usize = AES128_KEY_SIZE;
    const IV_SIZE: usize = CBC_IV_SIZE;

    fn name(&self) -> &'static str {
        "AES-128-CBC"
    }

    fn encrypt(&self, plaintext: &[u8], key: &[u8], iv: &[u8]) -> CoreResult<Vec<u8>> {
        to_core_result(encrypt_padded(plaintext, key, iv), "AES-128-CBC encryption")
    }

    fn decrypt(&self, ciphertext: &[u8], key: &[u8], iv: &[u8]) -> CoreResult<Vec<u8>> {
        to_core_result(decrypt_padded(ciphertext, key, iv), "AES-128-CBC decryption")
    }
}
