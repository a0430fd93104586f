//! The affine short-Weierstrass group law

use log::trace;
use monecc_params::traditional::weierstrass::{CurveParams, DEMO_CURVE};

use super::field::{is_prime, isqrt, PrimeField};
use super::point::Point;
use crate::error::{Error, Result};

/// The group of points of `y² = x³ + a·x + b` over 𝔽ₚ, with a fixed generator.
///
/// The curve constants are held by value, so independent instances (a test
/// curve next to the demonstration curve, say) never interfere. All
/// operations take points by reference and return new points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveGroup {
    params: CurveParams,
    field: PrimeField,
    generator: Point,
}

impl CurveGroup {
    /// Build the group for `params`, rejecting unusable parameters.
    ///
    /// Checks that `p` is a prime greater than 3, that `a`, `b` and the
    /// generator coordinates are reduced, that the curve is non-singular
    /// (`4a³ + 27b² ≢ 0`) and that the generator satisfies the equation.
    pub fn new(params: CurveParams) -> Result<Self> {
        if params.p <= 3 || !is_prime(params.p) {
            return Err(Error::param("CurveParams.p", "modulus must be a prime greater than 3"));
        }
        for (name, value) in [
            ("CurveParams.a", params.a),
            ("CurveParams.b", params.b),
            ("CurveParams.g_x", params.g_x),
            ("CurveParams.g_y", params.g_y),
        ] {
            if value >= params.p {
                return Err(Error::param(name, "value must be reduced modulo p"));
            }
        }

        let group = Self::from_trusted(params);
        let f = group.field;
        let disc = f.add(
            f.mul(4, f.mul(f.square(params.a), params.a)),
            f.mul(27, f.square(params.b)),
        );
        if disc == 0 {
            return Err(Error::param("CurveParams", "curve is singular"));
        }
        if !group.contains(&group.generator) {
            return Err(Error::NotOnCurve {
                context: "CurveParams generator",
                x: params.g_x,
                y: params.g_y,
            });
        }
        Ok(group)
    }

    /// The demonstration curve `y² = x³ + 35x + 3 (mod 101)`, `G = (2, 9)`.
    pub fn demo() -> Self {
        Self::from_trusted(DEMO_CURVE)
    }

    pub(crate) fn from_trusted(params: CurveParams) -> Self {
        Self {
            params,
            field: PrimeField::new_unchecked(params.p),
            generator: Point::new(params.g_x, params.g_y),
        }
    }

    /// The curve parameters
    pub fn params(&self) -> &CurveParams {
        &self.params
    }

    /// The underlying prime field
    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    /// The generator `G`
    pub fn generator(&self) -> Point {
        self.generator
    }

    /// Does `point` lie on the curve? The identity always does.
    pub fn contains(&self, point: &Point) -> bool {
        match *point {
            Point::Infinity => true,
            Point::Affine { x, y } => {
                if x >= self.params.p || y >= self.params.p {
                    return false;
                }
                let f = &self.field;
                let rhs = f.add(
                    f.add(f.mul(f.square(x), x), f.mul(self.params.a, x)),
                    self.params.b,
                );
                f.square(y) == rhs
            }
        }
    }

    /// Build a finite point, checking the curve equation.
    pub fn point(&self, x: u64, y: u64) -> Result<Point> {
        let candidate = Point::new(x, y);
        if !self.contains(&candidate) {
            return Err(Error::NotOnCurve {
                context: "CurveGroup::point",
                x,
                y,
            });
        }
        Ok(candidate)
    }

    /// Structural equality of two points
    #[inline]
    pub fn equals(&self, p: &Point, q: &Point) -> bool {
        p == q
    }

    /// Group addition `p + q`
    pub fn add(&self, p: &Point, q: &Point) -> Result<Point> {
        let (px, py, qx, qy) = match (*p, *q) {
            (Point::Infinity, _) => return Ok(*q),
            (_, Point::Infinity) => return Ok(*p),
            (Point::Affine { x: px, y: py }, Point::Affine { x: qx, y: qy }) => {
                let f = &self.field;
                (f.reduce(px), f.reduce(py), f.reduce(qx), f.reduce(qy))
            }
        };

        // Vertical line: q = -p
        if px == qx && py != qy {
            return Ok(Point::Infinity);
        }
        if px == qx {
            return self.double(&Point::new(px, py));
        }

        let f = &self.field;
        let m = f.div(f.sub(qy, py), f.sub(qx, px))?;
        let rx = f.sub(f.sub(f.square(m), px), qx);
        let ry = f.sub(f.mul(m, f.sub(px, rx)), py);
        Ok(Point::new(rx, ry))
    }

    /// Point doubling `2p`
    pub fn double(&self, p: &Point) -> Result<Point> {
        let (px, py) = match *p {
            Point::Infinity => return Ok(Point::Infinity),
            Point::Affine { x, y } => (self.field.reduce(x), self.field.reduce(y)),
        };

        // Vertical tangent: p is its own inverse
        if py == 0 {
            return Ok(Point::Infinity);
        }

        let f = &self.field;
        let numerator = f.add(f.mul(3, f.square(px)), self.params.a);
        let m = f.div(numerator, f.mul(2, py))?;
        let rx = f.sub(f.square(m), f.mul(2, px));
        let ry = f.sub(f.mul(m, f.sub(px, rx)), py);
        Ok(Point::new(rx, ry))
    }

    /// Scalar multiplication `k·p` by right-to-left double-and-add.
    ///
    /// `k = 0` yields the identity. The running power of `p` is doubled on
    /// every iteration; it is accumulated whenever the current bit is set.
    pub fn scalar_mul(&self, p: &Point, k: u64) -> Result<Point> {
        let mut result = Point::Infinity;
        let mut current = *p;
        let mut k = k;
        while k > 0 {
            if k & 1 == 1 {
                result = self.add(&result, &current)?;
            }
            current = self.double(&current)?;
            k >>= 1;
        }
        Ok(result)
    }

    /// `k·G`
    pub fn mul_generator(&self, k: u64) -> Result<Point> {
        self.scalar_mul(&self.generator, k)
    }

    /// Order of the generator: the least `n ≥ 1` with `n·G = O`.
    ///
    /// Found by walking the multiples of `G`. Hasse's theorem bounds the
    /// number of curve points by `p + 1 + 2√p`, so the walk is finite; for
    /// anything but tiny fields this is slow.
    pub fn generator_order(&self) -> Result<u64> {
        // p + 1 + 2·√p, rounded up
        let bound = (isqrt(self.params.p) + 1)
            .checked_mul(2)
            .and_then(|s| s.checked_add(self.params.p))
            .and_then(|s| s.checked_add(2))
            .ok_or(Error::Other("Hasse bound overflows u64"))?;
        let mut acc = self.generator;
        let mut n = 1u64;
        while !acc.is_identity() {
            acc = self.add(&acc, &self.generator)?;
            n += 1;
            if n > bound {
                return Err(Error::Other("generator order exceeds the Hasse bound"));
            }
        }
        trace!("generator order is {}", n);
        Ok(n)
    }
}

impl Default for CurveGroup {
    fn default() -> Self {
        Self::demo()
    }
}
