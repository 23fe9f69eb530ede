//! Template discovery
//!
//! Category directories are flat: only `.md` files directly inside the
//! directory are eligible. Subdirectories are not traversed.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;

/// Extension of installable templates
pub const TEMPLATE_EXTENSION: &str = "md";

/// Markdown files directly under a source directory
///
/// Nothing is read until [`EligibleFiles::iter`] is consumed, and every
/// call to `iter` lists the directory again, so the sequence can be
/// restarted. Entries come out in file name order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EligibleFiles {
    dir: PathBuf,
}

impl EligibleFiles {
    /// Describe the eligible files of `dir`
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Source directory being listed
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Lazily list eligible files
    ///
    /// Each item is an error if the directory or one of its entries cannot
    /// be read.
    pub fn iter(&self) -> impl Iterator<Item = Result<PathBuf>> {
        WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => {
                    let path = entry.into_path();
                    is_template(&path).then_some(Ok(path))
                }
                Err(e) => Some(Err(e.into())),
            })
    }

    /// Collect the listing
    ///
    /// # Errors
    ///
    /// Returns the first listing error encountered.
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        self.iter().collect()
    }
}

/// Whether `path` is a regular file (following symlinks) with the template
/// extension
fn is_template(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .is_some_and(|ext| ext == TEMPLATE_EXTENSION)
}
