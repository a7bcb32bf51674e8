//! Maps file names onto the synthetic page identifier space.
//!
//! The identifier is derived from the base name only, so `a/notes.txt` and
//! `b/notes.txt` share a page. Distinct names may also collide since the
//! space only holds `PAGE_ID_SPACE` pages.

use sha2::{Digest, Sha256};

use crate::common::types::{PageId, PAGE_ID_SPACE};

/// Number of leading digest bytes interpreted as the page key
const DIGEST_PREFIX_LEN: usize = 4;

/// Return the final path component of `filename`.
///
/// Both `/` and `\` count as separators. Falls back to the whole input when
/// no non-empty component exists.
pub fn base_name(filename: &str) -> &str {
    let trimmed = filename.trim_end_matches(['/', '\\']);
    match trimmed.rsplit(['/', '\\']).next() {
        Some(name) if !name.is_empty() => name,
        _ => filename,
    }
}

/// Derive the page identifier for a file name. Always in `1..=PAGE_ID_SPACE`.
pub fn derive_page_id(filename: &str) -> PageId {
    let digest = Sha256::digest(base_name(filename).as_bytes());

    let mut prefix = [0u8; DIGEST_PREFIX_LEN];
    prefix.copy_from_slice(&digest[..DIGEST_PREFIX_LEN]);

    u32::from_be_bytes(prefix) % PAGE_ID_SPACE + 1
}
