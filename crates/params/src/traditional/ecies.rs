//! Constants for the ECIES-style hybrid scheme

/// Default upper bound (inclusive) for private scalars
pub const DEFAULT_MAX_PRIVATE_SCALAR: u64 = 1000;

/// Default upper bound (inclusive) for ephemeral scalars
pub const DEFAULT_EPHEMERAL_BOUND: u64 = 1000;

/// Default cap on identity-avoidance redraws
pub const DEFAULT_MAX_KEYGEN_ATTEMPTS: u32 = 64;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// CBC initialization vector size in bytes
pub const CBC_IV_SIZE: usize = AES_BLOCK_SIZE;

/// Size of the HMAC-SHA256 tag appended by the authenticated CBC cipher
pub const HMAC_SHA256_TAG_SIZE: usize = 32;

/// Size of one encoded coordinate in the binary envelope (big-endian u64)
pub const COORDINATE_SIZE: usize = 8;

/// Size of an encoded point in the binary envelope
pub const POINT_SIZE: usize = 2 * COORDINATE_SIZE;

/// Header line of an armored private key
pub const PRIVATE_KEY_HEADER: &str = "---begin monECC private key---";

/// Header line of an armored public key
pub const PUBLIC_KEY_HEADER: &str = "---begin monECC public key---";

/// Footer line shared by both armored key kinds
pub const KEY_FOOTER: &str = "---end monECC key---";

/// Separator between the two coordinates of a textual point
pub const COORDINATE_SEPARATOR: char = ';';

/// Separator between the ephemeral point and the ciphertext in a text envelope
pub const ENVELOPE_SEPARATOR: char = ':';
