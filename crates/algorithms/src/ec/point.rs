//! Affine curve points

use core::fmt;

/// A point of the curve group: the identity, or a finite affine point.
///
/// A point is a plain immutable value. It knows nothing about the curve it
/// belongs to; the group law and the membership check live on
/// [`CurveGroup`](super::CurveGroup).
///
/// Derived equality is exactly the group's: infinity equals infinity, two
/// finite points are equal iff both coordinates match, and infinity never
/// equals a finite point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Point {
    /// The point at infinity, neutral element of the group
    Infinity,
    /// A finite point with coordinates in `[0, p)`
    Affine {
        /// x-coordinate
        x: u64,
        /// y-coordinate
        y: u64,
    },
}

impl Point {
    /// The identity (point at infinity)
    #[inline]
    pub const fn identity() -> Self {
        Point::Infinity
    }

    /// A finite point; no curve check is performed
    #[inline]
    pub const fn new(x: u64, y: u64) -> Self {
        Point::Affine { x, y }
    }

    /// Is this the identity point?
    #[inline]
    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    /// Both coordinates, or `None` for the identity
    #[inline]
    pub fn coordinates(&self) -> Option<(u64, u64)> {
        match *self {
            Point::Infinity => None,
            Point::Affine { x, y } => Some((x, y)),
        }
    }

    /// x-coordinate, or `None` for the identity
    #[inline]
    pub fn x(&self) -> Option<u64> {
        self.coordinates().map(|(x, _)| x)
    }

    /// y-coordinate, or `None` for the identity
    #[inline]
    pub fn y(&self) -> Option<u64> {
        self.coordinates().map(|(_, y)| y)
    }
}

impl Default for Point {
    fn default() -> Self {
        Point::Infinity
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Point::Infinity => write!(f, "(Infinity)"),
            Point::Affine { x, y } => write!(f, "({}, {})", x, y),
        }
    }
}
