//! Content hashing for file IDs.

use md5::{Digest, Md5};

/// Number of hash characters embedded in a file ID.
pub const HASH_TRUNCATE_LENGTH: usize = 10;

/// Compute the content hash for a file body.
///
/// The asset record layer stores this full digest; file IDs only carry the
/// truncated prefix returned by [`truncate_hash`].
pub fn content_hash(bytes: &[u8]) -> String {
    let mut hasher = Md5::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

/// Shorten a hash to the prefix embedded in file IDs.
pub fn truncate_hash(hash: &str) -> &str {
    match hash.char_indices().nth(HASH_TRUNCATE_LENGTH) {
        Some((end, _)) => &hash[..end],
        None => hash,
    }
}

/// Normalize a hash for embedding in a file ID.
///
/// Returns the lowercased truncated prefix, or `None` when that prefix does
/// not have the shape [`is_truncated_hash`] accepts on decode.
pub fn embeddable_hash(hash: &str) -> Option<String> {
    let truncated = truncate_hash(hash).to_ascii_lowercase();
    is_truncated_hash(&truncated).then_some(truncated)
}

/// Check whether a file ID segment has the shape of a truncated hash.
pub fn is_truncated_hash(segment: &str) -> bool {
    segment.len() == HASH_TRUNCATE_LENGTH
        && segment
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}
