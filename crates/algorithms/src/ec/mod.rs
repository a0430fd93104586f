//! Elliptic Curve Primitives
//!
//! Affine arithmetic on a short Weierstrass curve `y² = x³ + ax + b` over a
//! small prime field 𝔽ₚ:
//!
//! - [`PrimeField`]: modular arithmetic and inversion,
//! - [`Point`]: the identity or a finite `(x, y)` pair,
//! - [`CurveGroup`]: the group law (add, double, scalar multiply) for one
//!   set of curve parameters.
//!
//! Only affine coordinates are provided. No attempt is made at constant-time
//! execution.

mod field;
mod group;
mod point;

pub use field::PrimeField;
pub use group::CurveGroup;
pub use point::Point;

pub use monecc_params::traditional::weierstrass::{CurveParams, DEMO_CURVE};
