//! Deterministic hashing of resource identifiers.
//!
//! Cache entries are named by a digest of the identifier string, so the
//! digest must be stable across runs and process instances: equal input,
//! equal output, no dependence on memory addresses, random seeds, or
//! iteration order. SHA-256 satisfies that and is collision-resistant far
//! beyond what a cache directory will ever hold.

use sha2::{Digest, Sha256};

/// Compute the deterministic cache key for a resource identifier.
///
/// Returns the lowercase hex SHA-256 digest of the identifier bytes. The
/// result contains only `[0-9a-f]` and is used verbatim as a file name
/// under the cache root.
///
/// # Examples
///
/// ```
/// use resc_core::deterministic_hash;
///
/// let key = deterministic_hash("https://example.com/data.bin");
/// assert_eq!(key.len(), 64);
/// assert_eq!(key, deterministic_hash("https://example.com/data.bin"));
/// ```
#[must_use]
pub fn deterministic_hash(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex_encode(&hasher.finalize())
}

fn hex_encode(bytes: &[u8]) -> String {
    const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

    let mut out = String::with_capacity(bytes.len() * 2);
    for &byte in bytes {
        out.push(HEX_CHARS[(byte >> 4) as usize] as char);
        out.push(HEX_CHARS[(byte & 0x0f) as usize] as char);
    }
    out
}
