//! Constants for the classical (elliptic-curve) side of the toolkit

pub mod ecies;
pub mod weierstrass;
