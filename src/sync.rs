//! Category synchronization
//!
//! Copies the templates of each category from the package into the target
//! root. The core only produces reports; [`InstallReporter`] turns them into
//! console lines.

mod conflicts;
mod executor;
mod orchestrator;
mod reporting;

use std::collections::BTreeSet;
use std::path::PathBuf;

pub use conflicts::detect_conflicts;
pub use executor::copy_all;
pub use orchestrator::Installer;
pub use reporting::{InstallReporter, Level, StatusLine};

use crate::category::Category;

/// How a category was processed as a whole
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryOutcome {
    /// Every eligible file was attempted
    Synced,
    /// The source directory holds no eligible files
    Empty,
    /// The source directory does not exist
    MissingSource,
    /// The source directory could not be listed
    Unreadable(String),
}

/// Result of installing one template file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// Copied to a previously free name
    Installed,
    /// Overwrote a different existing file
    Replaced,
    /// Overwrote an existing file with identical content
    Unchanged,
    /// Copy failed; holds the error message naming the file
    Failed(String),
}

/// Per-file entry of a [`CategoryReport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileResult {
    /// File name of the template
    pub name: String,
    /// What happened to it
    pub status: FileStatus,
}

impl FileResult {
    /// Whether the file now exists at the destination with the source content
    #[must_use]
    pub const fn is_copied(&self) -> bool {
        !matches!(self.status, FileStatus::Failed(_))
    }
}

/// Outcome of synchronizing one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryReport {
    /// Category processed
    pub category: Category,
    /// Directory templates were read from
    pub source_dir: PathBuf,
    /// Directory templates were copied into
    pub target_dir: PathBuf,
    /// Category-level outcome
    pub outcome: CategoryOutcome,
    /// Names that already existed at the destination before copying
    pub conflicts: BTreeSet<String>,
    /// Per-file results in copy order
    pub files: Vec<FileResult>,
}

impl CategoryReport {
    /// Report for a category with no per-file results
    #[must_use]
    pub const fn new(
        category: Category,
        source_dir: PathBuf,
        target_dir: PathBuf,
        outcome: CategoryOutcome,
    ) -> Self {
        Self {
            category,
            source_dir,
            target_dir,
            outcome,
            conflicts: BTreeSet::new(),
            files: Vec::new(),
        }
    }

    /// Whether existing destination files were overwritten
    #[must_use]
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }

    /// Files successfully copied
    pub fn copied(&self) -> impl Iterator<Item = &FileResult> {
        self.files.iter().filter(|f| f.is_copied())
    }

    /// Files whose copy failed
    pub fn failed(&self) -> impl Iterator<Item = &FileResult> {
        self.files.iter().filter(|f| !f.is_copied())
    }

    /// Whether the category completed without any error
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, CategoryOutcome::Synced | CategoryOutcome::Empty)
            && self.failed().next().is_none()
    }
}

/// Outcome of a whole installer run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    /// Resolved target root
    pub target_root: PathBuf,
    /// Category directories created during this run
    pub created_dirs: Vec<PathBuf>,
    /// One report per category, in install order
    pub categories: Vec<CategoryReport>,
}

impl InstallReport {
    /// Number of files copied across all categories
    #[must_use]
    pub fn copied_count(&self) -> usize {
        self.categories.iter().map(|c| c.copied().count()).sum()
    }

    /// Whether every category completed without any error
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.categories.iter().all(CategoryReport::is_success)
    }
}

#[cfg(test)]
mod integration_tests {
    use std::fs;
    use std::path::Path;

    use tempfile::TempDir;

    use super::*;
    use crate::config::InstallConfig;

    fn create_test_file(dir: &Path, rel_path: &str, content: &str) {
        let path = dir.join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn setup_package() -> TempDir {
        let package = TempDir::new().unwrap();
        create_test_file(package.path(), "agents/a.md", "agent a");
        create_test_file(package.path(), "agents/b.md", "agent b");
        create_test_file(package.path(), "agents/notes.txt", "not a template");
        create_test_file(package.path(), "commands/run.md", "command run");
        package
    }

    fn test_config(package: &Path, root: &Path) -> InstallConfig {
        InstallConfig::new(Some(root), Some(package), false, false).unwrap()
    }

    #[test]
    fn test_install_copies_all_templates() {
        let package = setup_package();
        let target = TempDir::new().unwrap();
        let root = target.path().join("xyz");

        let config = test_config(package.path(), &root);
        let report = Installer::new(&config).run().unwrap();

        assert!(report.is_success());
        assert_eq!(report.copied_count(), 3);
        assert_eq!(report.created_dirs, vec![root.join("agents"), root.join("commands")]);

        for rel in ["agents/a.md", "agents/b.md", "commands/run.md"] {
            assert_eq!(
                fs::read(root.join(rel)).unwrap(),
                fs::read(package.path().join(rel)).unwrap()
            );
        }
        assert!(!root.join("agents/notes.txt").exists());
    }

    #[test]
    fn test_second_run_reports_everything_as_conflict() {
        let package = setup_package();
        let target = TempDir::new().unwrap();

        let config = test_config(package.path(), target.path());
        let installer = Installer::new(&config);
        let first = installer.run().unwrap();
        let second = installer.run().unwrap();

        assert!(first.categories.iter().all(|c| !c.has_conflicts()));
        assert!(second.created_dirs.is_empty());

        let agents = &second.categories[0];
        assert_eq!(
            agents.conflicts.iter().map(String::as_str).collect::<Vec<_>>(),
            ["a.md", "b.md"]
        );
        assert!(agents.files.iter().all(|f| f.status == FileStatus::Unchanged));

        let commands = &second.categories[1];
        assert_eq!(commands.conflicts.len(), 1);
        assert!(commands.conflicts.contains("run.md"));
        assert_eq!(
            fs::read_to_string(target.path().join("agents/a.md")).unwrap(),
            "agent a"
        );
    }

    #[test]
    fn test_existing_file_is_replaced() {
        let package = setup_package();
        let target = TempDir::new().unwrap();
        create_test_file(target.path(), "agents/a.md", "locally edited");

        let config = test_config(package.path(), target.path());
        let report = Installer::new(&config).run().unwrap();

        let agents = &report.categories[0];
        assert!(agents.conflicts.contains("a.md"));
        assert_eq!(
            agents.files[0],
            FileResult {
                name: "a.md".to_string(),
                status: FileStatus::Replaced,
            }
        );
        assert_eq!(agents.files[1].status, FileStatus::Installed);
        assert_eq!(
            fs::read_to_string(target.path().join("agents/a.md")).unwrap(),
            "agent a"
        );
    }

    #[test]
    fn test_missing_agents_still_installs_commands() {
        let package = TempDir::new().unwrap();
        create_test_file(package.path(), "commands/run.md", "command run");
        let target = TempDir::new().unwrap();

        let config = test_config(package.path(), target.path());
        let report = Installer::new(&config).run().unwrap();

        assert_eq!(report.categories[0].outcome, CategoryOutcome::MissingSource);
        assert_eq!(report.categories[1].outcome, CategoryOutcome::Synced);
        assert!(target.path().join("commands/run.md").exists());
        assert!(!report.is_success());
    }

    #[test]
    fn test_empty_category() {
        let package = TempDir::new().unwrap();
        fs::create_dir(package.path().join("agents")).unwrap();
        create_test_file(package.path(), "commands/readme.txt", "no templates");
        let target = TempDir::new().unwrap();

        let config = test_config(package.path(), target.path());
        let report = Installer::new(&config).run().unwrap();

        assert!(report.categories.iter().all(|c| c.outcome == CategoryOutcome::Empty));
        assert_eq!(report.copied_count(), 0);
        assert!(report.is_success());
    }

    #[test]
    fn test_copy_failure_is_isolated() {
        let package = setup_package();
        let target = TempDir::new().unwrap();
        // A directory in place of b.md makes that single copy fail
        fs::create_dir_all(target.path().join("agents/b.md")).unwrap();

        let config = test_config(package.path(), target.path());
        let report = Installer::new(&config).run().unwrap();

        let agents = &report.categories[0];
        assert_eq!(agents.outcome, CategoryOutcome::Synced);
        assert!(agents.conflicts.contains("b.md"));
        assert_eq!(agents.copied().map(|f| f.name.as_str()).collect::<Vec<_>>(), ["a.md"]);
        assert_eq!(agents.failed().map(|f| f.name.as_str()).collect::<Vec<_>>(), ["b.md"]);
        assert!(target.path().join("agents/a.md").is_file());
        assert!(report.categories[1].is_success());
        assert!(!report.is_success());
    }

    #[test]
    fn test_source_root_as_target_root_keeps_templates() {
        let package = setup_package();

        let config = test_config(package.path(), package.path());
        let report = Installer::new(&config).run().unwrap();

        assert!(report.is_success());
        assert!(report.created_dirs.is_empty());
        for category in &report.categories {
            assert!(category.files.iter().all(|f| f.status == FileStatus::Unchanged));
        }
        assert_eq!(
            fs::read_to_string(package.path().join("agents/a.md")).unwrap(),
            "agent a"
        );
        assert_eq!(
            fs::read_to_string(package.path().join("commands/run.md")).unwrap(),
            "command run"
        );
    }
}
