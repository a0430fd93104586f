//! # monecc
//!
//! A small elliptic-curve toolkit for learning: affine short-Weierstrass
//! group arithmetic, key pairs, and an ECIES-style hybrid encryption
//! scheme, on the demonstration curve `y² = x³ + 35x + 3 (mod 101)` with
//! generator `G = (2, 9)`.
//!
//! The parameters are deliberately tiny. Nothing here protects real data.
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - `monecc-api`: error type and capability traits
//! - `monecc-params`: curve parameters and scheme constants
//! - `monecc-algorithms`: field, group, KDF, ciphers, scalar sources
//! - `monecc-pke`: key pairs, key agreement, ECIES and the key codec
//!
//! ## Example
//!
//! ```
//! use monecc::prelude::*;
//!
//! let ecies = Ecies::demo();
//! let mut source = os_scalar_source();
//! let keys = ecies.generate_keypair(&mut source)?;
//! let sealed = ecies.encrypt_str(keys.public_key(), "hello", &mut source)?;
//! let text = sealed.to_string();
//!
//! let received = EciesMessage::parse(ecies.group(), &text)?;
//! assert_eq!(ecies.decrypt_to_string(keys.private_key(), &received)?, "hello");
//! # Ok::<(), monecc::Error>(())
//! ```

#![forbid(unsafe_code)]

// Core re-exports
pub use monecc_algorithms as algorithms;
pub use monecc_api as api;
pub use monecc_params as params;
pub use monecc_pke as pke;

pub use monecc_api::{Error, Result};

// Re-export workspace dependencies that users might need
pub use rand;
pub use zeroize;

/// Common imports for monecc users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{Pke, ScalarSource, Serialize, SerializeSecret, SymmetricCipher};

    // Curve arithmetic
    pub use crate::algorithms::{CurveGroup, Point, PrimeField};
    pub use crate::params::traditional::weierstrass::{CurveParams, DEMO_CURVE};

    // Symmetric layer and entropy
    pub use crate::algorithms::{
        derive_key_material, os_scalar_source, Aes128Cbc, Aes128CbcHmacSha256,
        DerivedKeyMaterial, RngScalarSource,
    };

    // Keys and the hybrid scheme
    pub use crate::pke::armor;
    pub use crate::pke::{
        derive_shared, Ecies, EciesConfig, EciesMessage, KeyPair, KeyPairService, PrivateKey,
        PublicKey,
    };
}
