//! Short Weierstrass curve parameters
//!
//! A curve here is `y² = x³ + a·x + b` over the prime field 𝔽ₚ, together
//! with a fixed generator `G = (g_x, g_y)`. All values are plain integers;
//! the curve group validates them when it is constructed.

/// Parameters of a short Weierstrass curve with a fixed generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveParams {
    /// Coefficient `a`
    pub a: u64,
    /// Coefficient `b`
    pub b: u64,
    /// Field modulus `p` (prime)
    pub p: u64,
    /// Generator x-coordinate
    pub g_x: u64,
    /// Generator y-coordinate
    pub g_y: u64,
}

/// The demonstration curve `y² = x³ + 35x + 3 (mod 101)` with `G = (2, 9)`.
///
/// The whole curve has 112 points; `G` only generates a subgroup of order 4.
/// Tiny on purpose: every value can be checked by hand.
pub const DEMO_CURVE: CurveParams = CurveParams {
    a: 35,
    b: 3,
    p: 101,
    g_x: 2,
    g_y: 9,
};
