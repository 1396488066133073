//! Password hashing built on bcrypt.

use anyhow::{Context, Result};

/// bcrypt work factor shared by all new hashes.
const WORK_FACTOR: u32 = 10;

/// Hash a plaintext password. Each call salts independently, so hashing
/// the same password twice yields different digests.
pub(crate) fn hash_password(plaintext: &str) -> Result<String> {
    bcrypt::hash(plaintext, WORK_FACTOR).context("failed to hash password")
}

/// Verify a plaintext password against a stored bcrypt hash.
pub(crate) fn verify_password(plaintext: &str, stored_hash: &str) -> Result<bool> {
    bcrypt::verify(plaintext, stored_hash).context("failed to verify password")
}
