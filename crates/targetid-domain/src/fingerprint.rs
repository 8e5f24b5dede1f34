use sha2::{Digest, Sha256};

/// Compute the fallback identity digest for a canonical target path.
///
/// The digest is over the path *string*, not file contents: two empty
/// directories at different locations get different ids, and a directory
/// keeps its id no matter what it contains at scan time. Returns 64
/// lowercase hex characters.
pub fn path_digest(canonical_path: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(canonical_path.as_bytes());
    hex::encode(hasher.finalize())
}
