//! The message envelope: ephemeral point first, ciphertext second

use core::fmt;
use core::str::FromStr;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use monecc_algorithms::{CurveGroup, Point};
use monecc_api::{Error as CoreError, Result as CoreResult, Serialize};
use monecc_params::traditional::ecies::{COORDINATE_SEPARATOR, ENVELOPE_SEPARATOR, POINT_SIZE};

use crate::error::Error;
use crate::keys::{decode_point, encode_point};

/// Output of an encryption: the ephemeral point `R` and the ciphertext.
///
/// Text form is `Rx;Ry:base64(ciphertext)`; binary form is
/// `Rx || Ry || ciphertext` with big-endian `u64` coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EciesMessage {
    x: u64,
    y: u64,
    ciphertext: Vec<u8>,
}

impl EciesMessage {
    /// Bundle an ephemeral point with a ciphertext.
    ///
    /// The point must be finite; curve membership is checked on decryption.
    pub fn new(ephemeral: Point, ciphertext: Vec<u8>) -> CoreResult<Self> {
        let (x, y) = ephemeral.coordinates().ok_or_else(|| {
            CoreError::from(Error::encoding(
                "EciesMessage",
                "ephemeral point is the point at infinity",
            ))
        })?;
        Ok(Self { x, y, ciphertext })
    }

    /// Parse the text form and check that `R` lies on `group`
    pub fn parse(group: &CurveGroup, text: &str) -> CoreResult<Self> {
        let message: Self = text.parse()?;
        let ephemeral = message.ephemeral();
        if !group.contains(&ephemeral) {
            return Err(Error::encoding(
                "EciesMessage::parse",
                format!("ephemeral point {} is not on the curve", ephemeral),
            )
            .into());
        }
        Ok(message)
    }

    /// The ephemeral point `R`
    pub fn ephemeral(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// The symmetric ciphertext
    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    /// Split into `(R, ciphertext)`
    pub fn into_parts(self) -> (Point, Vec<u8>) {
        (Point::new(self.x, self.y), self.ciphertext)
    }
}

impl fmt::Display for EciesMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}",
            self.x,
            COORDINATE_SEPARATOR,
            self.y,
            ENVELOPE_SEPARATOR,
            STANDARD.encode(&self.ciphertext)
        )
    }
}

impl FromStr for EciesMessage {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        const CTX: &str = "EciesMessage::from_str";
        let (point, body) = s
            .trim()
            .split_once(ENVELOPE_SEPARATOR)
            .ok_or_else(|| CoreError::encoding(CTX, "missing ':' between point and ciphertext"))?;
        let (x, y) = point
            .split_once(COORDINATE_SEPARATOR)
            .ok_or_else(|| CoreError::encoding(CTX, "missing ';' between coordinates"))?;
        let x: u64 = x
            .parse()
            .map_err(|_| CoreError::encoding(CTX, format!("bad x-coordinate {:?}", x)))?;
        let y: u64 = y
            .parse()
            .map_err(|_| CoreError::encoding(CTX, format!("bad y-coordinate {:?}", y)))?;
        let ciphertext = STANDARD
            .decode(body)
            .map_err(|e| CoreError::encoding(CTX, format!("bad base64 ciphertext: {}", e)))?;
        Ok(Self { x, y, ciphertext })
    }
}

impl Serialize for EciesMessage {
    fn from_bytes(bytes: &[u8]) -> CoreResult<Self> {
        if bytes.len() < POINT_SIZE {
            return Err(CoreError::InvalidLength {
                context: "EciesMessage::from_bytes",
                expected: POINT_SIZE,
                actual: bytes.len(),
            });
        }
        let (x, y) = decode_point(&bytes[..POINT_SIZE], "EciesMessage::from_bytes")?;
        Ok(Self {
            x,
            y,
            ciphertext: bytes[POINT_SIZE..].to_vec(),
        })
    }

    fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(POINT_SIZE + self.ciphertext.len());
        out.extend_from_slice(&encode_point(self.x, self.y));
        out.extend_from_slice(&self.ciphertext);
        out
    }
}
