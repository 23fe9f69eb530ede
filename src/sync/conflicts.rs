//! Conflict detection
//!
//! A conflict is a template whose file name already exists in the
//! destination directory. Detection is read-only: the copy step overwrites
//! conflicting files regardless.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// File names from `files` that already exist in `target_dir`
#[must_use]
pub fn detect_conflicts(target_dir: &Path, files: &[PathBuf]) -> BTreeSet<String> {
    files
        .iter()
        .filter_map(|file| file.file_name())
        .filter(|name| target_dir.join(name).exists())
        .map(|name| name.to_string_lossy().into_owned())
        .collect()
}
