//! Constant values for the monecc toolkit
//!
//! Curve parameters, ECIES sizes and defaults, and the markers of the
//! armored key format. Nothing in here computes anything.

pub mod traditional;
pub mod utils;
