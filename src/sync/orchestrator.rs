//! Install orchestration - coordinates the install workflow

use tracing::debug;

use super::executor::copy_all;
use super::{CategoryOutcome, CategoryReport, InstallReport};
use crate::category::Category;
use crate::config::InstallConfig;
use crate::error::InstallError;
use crate::target::{TargetDirs, check_base_installation, ensure_directories};

/// Runs a full installation for one configuration
pub struct Installer<'a> {
    config: &'a InstallConfig,
}

impl<'a> Installer<'a> {
    /// Create a new installer
    #[must_use]
    pub const fn new(config: &'a InstallConfig) -> Self {
        Self { config }
    }

    /// Install every category
    ///
    /// Categories are processed one after the other. Problems within a
    /// category end up in its [`CategoryReport`] and never stop the next
    /// one.
    ///
    /// # Errors
    ///
    /// Returns an error, before anything is written, if the base
    /// installation is missing outside test mode, or if a category
    /// directory cannot be created.
    pub fn run(&self) -> Result<InstallReport, InstallError> {
        let root = self.config.target_root();
        debug!(
            root = %root.display(),
            source = %self.config.source_root().display(),
            test_mode = self.config.test_mode(),
            "starting install"
        );

        check_base_installation(root, self.config.test_mode())?;
        let dirs = ensure_directories(root)?;

        let categories = Category::ALL
            .into_iter()
            .map(|category| self.sync_category(category, &dirs))
            .collect();

        Ok(InstallReport {
            target_root: root.to_path_buf(),
            created_dirs: dirs.created,
            categories,
        })
    }

    /// Install one category into its prepared directory
    fn sync_category(&self, category: Category, dirs: &TargetDirs) -> CategoryReport {
        let source_dir = self.config.source_root().join(category.dir_name());
        let target_dir = dirs.for_category(category);

        if !source_dir.is_dir() {
            debug!(%category, source = %source_dir.display(), "source directory missing");
            return CategoryReport::new(
                category,
                source_dir,
                target_dir.to_path_buf(),
                CategoryOutcome::MissingSource,
            );
        }

        copy_all(&source_dir, target_dir, category)
    }
}
