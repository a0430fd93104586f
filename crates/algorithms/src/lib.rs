//! Primitives for the monecc toolkit
//!
//! This crate holds everything below the public-key scheme:
//!
//! - prime-field arithmetic and the affine short-Weierstrass group law ([`ec`]),
//! - the point-to-key-material derivation ([`kdf`]),
//! - AES-128-CBC ciphers used as the symmetric layer ([`block`]),
//! - `rand`-backed scalar sources ([`rng`]).
//!
//! The demonstration parameters are far too small to offer any security;
//! the code favours readability over constant-time behaviour.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Elliptic curve group
pub mod ec;
pub use ec::{CurveGroup, Point, PrimeField};

// Key derivation from shared points
pub mod kdf;
pub use kdf::{derive_key_material, DerivedKeyMaterial};

// Block cipher modes
pub mod block;
pub use block::{Aes128Cbc, Aes128CbcHmacSha256};

// Scalar sources
pub mod rng;
pub use rng::{os_scalar_source, RngScalarSource};
