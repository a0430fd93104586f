//! Diffie-Hellman style key agreement on the curve group

use monecc_algorithms::{CurveGroup, Point};

use crate::error::Result;

/// The shared point `scalar·point`.
///
/// For `Q = k·G` and `R = r·G` both parties reach the same point:
/// `derive_shared(r, Q) == derive_shared(k, R)`.
pub fn derive_shared(group: &CurveGroup, scalar: u64, point: &Point) -> Result<Point> {
    Ok(group.scalar_mul(point, scalar)?)
}
