//! Key pairs and the ECIES-style hybrid scheme of the monecc toolkit.
//!
//! A key pair is a private scalar `k` and its public point `Q = k·G`. To
//! encrypt, the sender draws an ephemeral scalar `r`, publishes `R = r·G`
//! and derives symmetric key material from the shared point `S = r·Q`; the
//! recipient recomputes the same `S` as `k·R`.

#![forbid(unsafe_code)]

pub mod agreement;
pub mod armor;
pub mod config;
pub mod ecies;
pub mod error;
pub mod keypair;
pub mod keys;

// Re-export key items
pub use agreement::derive_shared;
pub use config::EciesConfig;
pub use ecies::{Ecies, EciesMessage};
pub use error::{Error, Result};
pub use keypair::KeyPairService;
pub use keys::{KeyPair, PrivateKey, PublicKey};
