//! Private scalars, public points and key pairs

use core::fmt;

use monecc_algorithms::{CurveGroup, Point};
use monecc_api::{Error as CoreError, Result as CoreResult, Serialize, SerializeSecret};
use monecc_params::traditional::ecies::{COORDINATE_SEPARATOR, COORDINATE_SIZE, POINT_SIZE};
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::{Error, Result};

/// A private scalar `k ≥ 1`.
///
/// Zeroized on drop. `Debug` never prints the value; the only ways out are
/// [`PrivateKey::expose_scalar`], the secret byte encoding and the armored
/// key codec.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey {
    scalar: u64,
}

impl PrivateKey {
    /// Wrap a scalar, rejecting zero
    pub fn new(scalar: u64) -> Result<Self> {
        if scalar == 0 {
            return Err(Error::encoding("PrivateKey", "scalar must be at least 1"));
        }
        Ok(Self { scalar })
    }

    /// The raw scalar
    pub fn expose_scalar(&self) -> u64 {
        self.scalar
    }

    /// The matching public key `k·G`, failing if it is the identity
    pub fn public_key(&self, group: &CurveGroup) -> Result<PublicKey> {
        let point = group.mul_generator(self.scalar)?;
        PublicKey::from_point(group, point)
    }
}

impl ConstantTimeEq for PrivateKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.scalar.ct_eq(&other.scalar)
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for PrivateKey {}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey([REDACTED])")
    }
}

impl SerializeSecret for PrivateKey {
    /// Big-endian `u64`
    fn from_bytes(bytes: &[u8]) -> CoreResult<Self> {
        let raw: [u8; COORDINATE_SIZE] =
            bytes.try_into().map_err(|_| CoreError::InvalidLength {
                context: "PrivateKey::from_bytes",
                expected: COORDINATE_SIZE,
                actual: bytes.len(),
            })?;
        Ok(Self::new(u64::from_be_bytes(raw))?)
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.scalar.to_be_bytes().to_vec())
    }
}

/// A public point `Q = k·G`, never the identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PublicKey {
    x: u64,
    y: u64,
}

impl PublicKey {
    /// Accept `point` as a public key if it is a finite point of `group`
    pub fn from_point(group: &CurveGroup, point: Point) -> Result<Self> {
        let (x, y) = point
            .coordinates()
            .ok_or(Error::InvalidPublicKey("point at infinity"))?;
        if !group.contains(&point) {
            return Err(Error::InvalidPublicKey("point is not on the curve"));
        }
        Ok(Self { x, y })
    }

    /// Build from coordinates, checking the curve equation
    pub fn from_coordinates(group: &CurveGroup, x: u64, y: u64) -> Result<Self> {
        Self::from_point(group, Point::new(x, y))
    }

    /// The underlying point
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// `(x, y)`
    pub fn coordinates(&self) -> (u64, u64) {
        (self.x, self.y)
    }
}

impl fmt::Display for PublicKey {
    /// `x;y`, the form used inside armored keys
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.x, COORDINATE_SEPARATOR, self.y)
    }
}

impl Serialize for PublicKey {
    /// `x || y`, each a big-endian `u64`.
    ///
    /// Only the structure is checked here; curve membership needs a group
    /// and is checked again wherever the key is used.
    fn from_bytes(bytes: &[u8]) -> CoreResult<Self> {
        let (x, y) = decode_point(bytes, "PublicKey::from_bytes")?;
        Ok(Self { x, y })
    }

    fn to_bytes(&self) -> Vec<u8> {
        encode_point(self.x, self.y).to_vec()
    }
}

pub(crate) fn encode_point(x: u64, y: u64) -> [u8; POINT_SIZE] {
    let mut out = [0u8; POINT_SIZE];
    out[..COORDINATE_SIZE].copy_from_slice(&x.to_be_bytes());
    out[COORDINATE_SIZE..].copy_from_slice(&y.to_be_bytes());
    out
}

pub(crate) fn decode_point(bytes: &[u8], context: &'static str) -> CoreResult<(u64, u64)> {
    if bytes.len() != POINT_SIZE {
        return Err(CoreError::InvalidLength {
            context,
            expected: POINT_SIZE,
            actual: bytes.len(),
        });
    }
    let x: [u8; COORDINATE_SIZE] = bytes[..COORDINATE_SIZE].try_into()?;
    let y: [u8; COORDINATE_SIZE] = bytes[COORDINATE_SIZE..].try_into()?;
    Ok((u64::from_be_bytes(x), u64::from_be_bytes(y)))
}

/// A private key together with its public key
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPair {
    private: PrivateKey,
    public: PublicKey,
}

impl KeyPair {
    /// Pair `private` with its public key on `group`
    pub fn from_private(group: &CurveGroup, private: PrivateKey) -> Result<Self> {
        let public = private.public_key(group)?;
        Ok(Self { private, public })
    }

    pub(crate) fn from_parts(private: PrivateKey, public: PublicKey) -> Self {
        Self { private, public }
    }

    /// The private half
    pub fn private_key(&self) -> &PrivateKey {
        &self.private
    }

    /// The public half
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Split into `(private, public)`
    pub fn into_parts(self) -> (PrivateKey, PublicKey) {
        (self.private, self.public)
    }
}
