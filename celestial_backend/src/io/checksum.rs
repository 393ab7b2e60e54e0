//! Checksums for skipping unchanged reminder output.

use sha2::{Digest, Sha256};

/// SHA-256 of `content` as lowercase hex.
pub fn calculate_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}
