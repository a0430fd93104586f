//! Constants for hash functions

/// Output size of SHA-256 in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// Size of the IV half of a SHA-256 digest split by the point KDF
pub const KDF_IV_SIZE: usize = SHA256_OUTPUT_SIZE / 2;

/// Size of the key half of a SHA-256 digest split by the point KDF
pub const KDF_KEY_SIZE: usize = SHA256_OUTPUT_SIZE - KDF_IV_SIZE;
