//! Capability traits at the seams of the monecc core

pub mod cipher;
pub mod pke;
pub mod rng;
pub mod serialize;

pub use cipher::SymmetricCipher;
pub use pke::Pke;
pub use rng::ScalarSource;
pub use serialize::{Serialize, SerializeSecret};
