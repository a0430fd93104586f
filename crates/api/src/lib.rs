//! Public API traits and types for the monecc toolkit
//!
//! This crate is the contract layer of the workspace: the canonical error
//! type every other crate converts into, and the capability traits that
//! separate the elliptic-curve core from its collaborators (entropy, the
//! symmetric cipher, byte serialization, and the public-key scheme itself).

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

// Re-export all traits from the traits module
pub use traits::{Pke, ScalarSource, Serialize, SerializeSecret, SymmetricCipher};

// Re-export trait modules for direct access
pub use traits::{cipher, pke, rng, serialize};
