//! Key derivation from a shared curve point
//!
//! The shared point `(x, y)` is rendered as the ASCII text `"{x};{y}"` and
//! hashed with SHA-256. The first half of the digest becomes the CBC
//! initialization vector, the second half the AES-128 key. The mapping is
//! deterministic and byte-compatible with earlier monECC releases.

use core::fmt;

use monecc_params::utils::hash::{KDF_IV_SIZE, KDF_KEY_SIZE, SHA256_OUTPUT_SIZE};
use sha2::{Digest, Sha256};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::ec::Point;
use crate::error::{Error, Result};

/// Symmetric key and IV derived from a shared point.
///
/// Zeroized on drop; `Debug` never prints the bytes.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct DerivedKeyMaterial {
    key: [u8; KDF_KEY_SIZE],
    iv: [u8; KDF_IV_SIZE],
}

impl DerivedKeyMaterial {
    /// The symmetric key (second half of the digest)
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// The initialization vector (first half of the digest)
    pub fn iv(&self) -> &[u8] {
        &self.iv
    }
}

impl fmt::Debug for DerivedKeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DerivedKeyMaterial([REDACTED])")
    }
}

/// Derive key and IV from a shared point.
///
/// Fails with `InvalidSharedSecret` for the point at infinity: it has no
/// coordinates, and must never be mapped to some fixed key.
pub fn derive_key_material(shared: &Point) -> Result<DerivedKeyMaterial> {
    let (x, y) = shared.coordinates().ok_or(Error::InvalidSharedSecret {
        context: "point KDF",
    })?;

    let mut encoded = format!("{};{}", x, y).into_bytes();
    let mut digest: [u8; SHA256_OUTPUT_SIZE] = Sha256::digest(&encoded).into();
    encoded.zeroize();

    let mut material = DerivedKeyMaterial {
        key: [0u8; KDF_KEY_SIZE],
        iv: [0u8; KDF_IV_SIZE],
    };
    material.iv.copy_from_slice(&digest[..KDF_IV_SIZE]);
    material.key.copy_from_slice(&digest[KDF_IV_SIZE..]);
    digest.zeroize();

    Ok(material)
}
