//! Armored text encoding of keys, and key files
//!
//! ```text
//! ---begin monECC private key---
//! base64("k")
//! ---end monECC key---
//! ```
//!
//! Public keys use their own header and the payload `base64("x;y")`.

use std::fs;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use log::debug;
use monecc_algorithms::CurveGroup;
use monecc_api::error::ResultExt;
use monecc_api::Result as CoreResult;
use monecc_params::traditional::ecies::{
    COORDINATE_SEPARATOR, KEY_FOOTER, PRIVATE_KEY_HEADER, PUBLIC_KEY_HEADER,
};
use zeroize::Zeroizing;

use crate::error::{Error, Result};
use crate::keys::{KeyPair, PrivateKey, PublicKey};

/// Armor a private key. The returned text is zeroized on drop.
pub fn encode_private_key(key: &PrivateKey) -> Zeroizing<String> {
    let scalar = Zeroizing::new(key.expose_scalar().to_string());
    Zeroizing::new(armor(PRIVATE_KEY_HEADER, scalar.as_bytes()))
}

/// Armor a public key
pub fn encode_public_key(key: &PublicKey) -> String {
    armor(PUBLIC_KEY_HEADER, key.to_string().as_bytes())
}

/// Decode an armored private key
pub fn decode_private_key(text: &str) -> CoreResult<PrivateKey> {
    const CTX: &str = "armored private key";
    let payload = Zeroizing::new(dearmor(text, PRIVATE_KEY_HEADER, CTX)?);
    let scalar: u64 = payload
        .trim()
        .parse()
        .map_err(|_| Error::encoding(CTX, "payload is not an unsigned integer"))?;
    PrivateKey::new(scalar).with_context(CTX)
}

/// Decode an armored public key and check it against `group`
pub fn decode_public_key(group: &CurveGroup, text: &str) -> CoreResult<PublicKey> {
    const CTX: &str = "armored public key";
    let payload = dearmor(text, PUBLIC_KEY_HEADER, CTX)?;
    let (x, y) = payload
        .trim()
        .split_once(COORDINATE_SEPARATOR)
        .ok_or_else(|| Error::encoding(CTX, "payload is not of the form x;y"))?;
    let x: u64 = x
        .parse()
        .map_err(|_| Error::encoding(CTX, format!("bad x-coordinate {:?}", x)))?;
    let y: u64 = y
        .parse()
        .map_err(|_| Error::encoding(CTX, format!("bad y-coordinate {:?}", y)))?;
    PublicKey::from_coordinates(group, x, y)
        .map_err(|e| Error::encoding(CTX, e.to_string()).into())
}

/// Write an armored private key to `path`
pub fn save_private_key(path: impl AsRef<Path>, key: &PrivateKey) -> CoreResult<()> {
    let path = path.as_ref();
    fs::write(path, encode_private_key(key).as_bytes()).with_context("save_private_key")?;
    debug!("wrote private key to {}", path.display());
    Ok(())
}

/// Read an armored private key from `path`
pub fn load_private_key(path: impl AsRef<Path>) -> CoreResult<PrivateKey> {
    let text = Zeroizing::new(fs::read_to_string(path).with_context("load_private_key")?);
    decode_private_key(&text)
}

/// Write an armored public key to `path`
pub fn save_public_key(path: impl AsRef<Path>, key: &PublicKey) -> CoreResult<()> {
    let path = path.as_ref();
    fs::write(path, encode_public_key(key)).with_context("save_public_key")?;
    debug!("wrote public key to {}", path.display());
    Ok(())
}

/// Read an armored public key from `path`
pub fn load_public_key(group: &CurveGroup, path: impl AsRef<Path>) -> CoreResult<PublicKey> {
    let text = fs::read_to_string(path).with_context("load_public_key")?;
    decode_public_key(group, &text)
}

/// Write `{stem}.priv` and `{stem}.pub`, returning both paths
pub fn save_keypair(stem: impl AsRef<Path>, pair: &KeyPair) -> CoreResult<(PathBuf, PathBuf)> {
    let stem = stem.as_ref();
    let private_path = with_suffix(stem, "priv");
    let public_path = with_suffix(stem, "pub");
    save_private_key(&private_path, pair.private_key())?;
    save_public_key(&public_path, pair.public_key())?;
    Ok((private_path, public_path))
}

fn with_suffix(stem: &Path, suffix: &str) -> PathBuf {
    let mut name = stem.as_os_str().to_owned();
    name.push(".");
    name.push(suffix);
    PathBuf::from(name)
}

fn armor(header: &str, payload: &[u8]) -> String {
    format!("{}\n{}\n{}\n", header, STANDARD.encode(payload), KEY_FOOTER)
}

/// Check the framing and return the decoded payload text
fn dearmor(text: &str, header: &str, context: &'static str) -> Result<String> {
    let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());
    match lines.next() {
        Some(line) if line == header => {}
        Some(_) => return Err(Error::encoding(context, format!("expected header {:?}", header))),
        None => return Err(Error::encoding(context, "empty input")),
    }
    let body = lines
        .next()
        .ok_or_else(|| Error::encoding(context, "missing payload"))?;
    if lines.next() != Some(KEY_FOOTER) {
        return Err(Error::encoding(context, "missing footer"));
    }
    if lines.next().is_some() {
        return Err(Error::encoding(context, "trailing data after footer"));
    }
    let decoded = STANDARD
        .decode(body)
        .map_err(|e| Error::encoding(context, format!("bad base64: {}", e)))?;
    String::from_utf8(decoded).map_err(|_| Error::encoding(context, "payload is not UTF-8"))
}
