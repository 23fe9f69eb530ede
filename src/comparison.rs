//! Source/destination comparison
//!
//! Tells whether an overwritten destination already held the template's
//! bytes, and whether a destination path is the template file itself.

use std::fs;
use std::path::Path;

use anyhow::Context;
use sha2::{Digest, Sha256};

use crate::error::Result;

/// File hash result
pub type FileHash = [u8; 32];

/// SHA-256 of a file's contents
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn hash_file(path: &Path) -> Result<FileHash> {
    let bytes = fs::read(path).with_context(|| format!("Failed to hash {}", path.display()))?;
    Ok(Sha256::digest(bytes).into())
}

/// Whether two files have identical contents
///
/// Unreadable files compare as different.
#[must_use]
pub fn same_content(a: &Path, b: &Path) -> bool {
    match (hash_file(a), hash_file(b)) {
        (Ok(ha), Ok(hb)) => ha == hb,
        _ => false,
    }
}

/// Whether both paths resolve to the same file on disk
///
/// Copying a file onto itself truncates it, so callers must check this
/// first. Paths that cannot be resolved are treated as distinct.
#[must_use]
pub fn is_same_file(a: &Path, b: &Path) -> bool {
    match (dunce::canonicalize(a), dunce::canonicalize(b)) {
        (Ok(ca), Ok(cb)) => ca == cb,
        _ => false,
    }
}
