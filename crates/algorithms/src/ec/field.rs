//! Prime field arithmetic
//!
//! Elements of 𝔽ₚ are plain `u64` values in `[0, p)`. Products are formed
//! in `u128` before reduction, so any modulus that fits in a `u64` works.

use crate::error::{Error, Result};

/// The prime field 𝔽ₚ
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PrimeField {
    modulus: u64,
}

impl PrimeField {
    /// Create the field of integers modulo `modulus`.
    ///
    /// Fails unless `modulus` is prime.
    pub fn new(modulus: u64) -> Result<Self> {
        if !is_prime(modulus) {
            return Err(Error::param("PrimeField", "modulus is not prime"));
        }
        Ok(Self { modulus })
    }

    /// Build a field whose modulus is already known to be prime.
    pub(crate) const fn new_unchecked(modulus: u64) -> Self {
        Self { modulus }
    }

    /// The field modulus `p`
    #[inline]
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Reduce an arbitrary integer into `[0, p)`
    #[inline]
    pub fn reduce(&self, n: u64) -> u64 {
        n % self.modulus
    }

    /// `a + b mod p`
    #[inline]
    pub fn add(&self, a: u64, b: u64) -> u64 {
        ((a as u128 + b as u128) % self.modulus as u128) as u64
    }

    /// `a - b mod p`
    #[inline]
    pub fn sub(&self, a: u64, b: u64) -> u64 {
        let p = self.modulus as u128;
        ((a as u128 % p + p - b as u128 % p) % p) as u64
    }

    /// `-a mod p`
    #[inline]
    pub fn neg(&self, a: u64) -> u64 {
        self.sub(0, a)
    }

    /// `a · b mod p`
    #[inline]
    pub fn mul(&self, a: u64, b: u64) -> u64 {
        ((a as u128 * b as u128) % self.modulus as u128) as u64
    }

    /// `a² mod p`
    #[inline]
    pub fn square(&self, a: u64) -> u64 {
        self.mul(a, a)
    }

    /// `base^exp mod p` by square-and-multiply
    pub fn pow(&self, base: u64, mut exp: u64) -> u64 {
        let mut result = self.reduce(1);
        let mut base = self.reduce(base);
        while exp > 0 {
            if exp & 1 == 1 {
                result = self.mul(result, base);
            }
            base = self.square(base);
            exp >>= 1;
        }
        result
    }

    /// Multiplicative inverse by the extended Euclidean algorithm.
    ///
    /// Returns the unique `m` in `[1, p)` with `n·m ≡ 1 (mod p)`, or
    /// `DivisionByZero` when `n ≡ 0 (mod p)`.
    pub fn inverse(&self, n: u64) -> Result<u64> {
        let n = self.reduce(n);
        if n == 0 {
            return Err(Error::DivisionByZero {
                operation: "field inverse",
            });
        }

        // Invariant: old_r ≡ old_s·n and r ≡ s·n (mod p)
        let (mut old_r, mut r) = (n as i128, self.modulus as i128);
        let (mut old_s, mut s) = (1i128, 0i128);
        while r != 0 {
            let q = old_r / r;
            (old_r, r) = (r, old_r - q * r);
            (old_s, s) = (s, old_s - q * s);
        }
        debug_assert_eq!(old_r, 1, "gcd(n, p) must be 1 for prime p");

        Ok(old_s.rem_euclid(self.modulus as i128) as u64)
    }

    /// Multiplicative inverse by Fermat's little theorem: `n^(p-2) mod p`.
    ///
    /// Agrees with [`inverse`](Self::inverse) for every non-zero input.
    pub fn inverse_fermat(&self, n: u64) -> Result<u64> {
        let n = self.reduce(n);
        if n == 0 {
            return Err(Error::DivisionByZero {
                operation: "field inverse",
            });
        }
        Ok(self.pow(n, self.modulus - 2))
    }

    /// `a / b mod p`
    pub fn div(&self, a: u64, b: u64) -> Result<u64> {
        Ok(self.mul(a, self.inverse(b)?))
    }
}

/// Deterministic primality test by trial division.
///
/// Only meant for the small moduli this toolkit is built around.
pub(crate) fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut d = 3u64;
    while d.saturating_mul(d) <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// Integer square root (floor)
pub(crate) fn isqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    let mut x = (n as f64).sqrt() as u64;
    while x.saturating_mul(x) > n {
        x -= 1;
    }
    while (x + 1).saturating_mul(x + 1) <= n {
        x += 1;
    }
    x
}
