//! Target root preparation
//!
//! Checks that the Claude configuration directory exists (outside test
//! mode) and creates the per-category directories beneath it.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::category::Category;
use crate::error::InstallError;

/// Category directories under the target root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetDirs {
    /// `<root>/agents`
    pub agents_dir: PathBuf,
    /// `<root>/commands`
    pub commands_dir: PathBuf,
    /// Directories that did not exist and were created by this call
    pub created: Vec<PathBuf>,
}

impl TargetDirs {
    /// Destination directory for a category
    #[must_use]
    pub fn for_category(&self, category: Category) -> &Path {
        match category {
            Category::Agent => &self.agents_dir,
            Category::Command => &self.commands_dir,
        }
    }
}

/// Verify that the base installation exists
///
/// In test mode the root is trusted as given and may not exist yet.
///
/// # Errors
///
/// Returns [`InstallError::BaseNotFound`] if the root is not a directory
/// outside test mode.
pub fn check_base_installation(root: &Path, test_mode: bool) -> Result<(), InstallError> {
    if test_mode {
        debug!(root = %root.display(), "test mode, skipping base installation check");
        return Ok(());
    }

    if root.is_dir() {
        Ok(())
    } else {
        Err(InstallError::BaseNotFound(root.to_path_buf()))
    }
}

/// Create `<root>/agents` and `<root>/commands` when missing
///
/// Missing intermediate directories are created too. Calling this on a
/// root where both directories already exist changes nothing and reports
/// no creations.
///
/// # Errors
///
/// Returns [`InstallError::CreateDir`] if a directory cannot be created.
pub fn ensure_directories(root: &Path) -> Result<TargetDirs, InstallError> {
    let mut created = Vec::new();

    for category in Category::ALL {
        let dir = root.join(category.dir_name());
        if dir.is_dir() {
            continue;
        }

        fs::create_dir_all(&dir).map_err(|source| InstallError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        debug!(dir = %dir.display(), "created directory");
        created.push(dir);
    }

    Ok(TargetDirs {
        agents_dir: root.join(Category::Agent.dir_name()),
        commands_dir: root.join(Category::Command.dir_name()),
        created,
    })
}
