//! Salted SHA-256 password hashes.
//!
//! Stored format: `<salt_hex>$<sha256_hex>`, where the digest covers the salt
//! text followed by the password. Bare 64-char hex digests (unsalted SHA-256
//! of the password) are still accepted on verification.
//!
//! This is a single salted digest kept so existing hashes keep verifying. It
//! is not a slow key-derivation function.

use sha2::{Digest, Sha256};
use uuid::Uuid;

const SEPARATOR: char = '$';

fn salted_digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Hashes `password` with a fresh random salt.
pub fn hash_password(password: &str) -> String {
    let salt = hex::encode(Uuid::new_v4().as_bytes());
    let digest = salted_digest(&salt, password);
    format!("{salt}{SEPARATOR}{digest}")
}

pub fn verify_password(password: &str, stored: &str) -> bool {
    let (salt, expected) = stored.split_once(SEPARATOR).unwrap_or(("", stored));
    constant_time_eq(salted_digest(salt, password).as_bytes(), expected.as_bytes())
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
