//! Installation settings
//!
//! The command line is parsed once at the entry point and turned into an
//! [`InstallConfig`], which is passed by reference to everything downstream.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::error::{InstallError, Result};

/// Name of the Claude configuration directory under the home directory
pub const CLAUDE_DIR_NAME: &str = ".claude";

/// Immutable settings for one installer run
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct InstallConfig {
    target_root: PathBuf,
    source_root: PathBuf,
    test_mode: bool,
    auto: bool,
    verbose: bool,
}

impl InstallConfig {
    /// Build the configuration from raw command-line values
    ///
    /// A non-empty `test_dir` switches to test mode: it becomes the target
    /// root and the base-installation check is skipped. Without
    /// `source_dir` the templates are read from next to the executable.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory, the current directory or
    /// the executable location cannot be determined.
    #[allow(clippy::fn_params_excessive_bools)]
    pub fn new(
        test_dir: Option<&Path>,
        source_dir: Option<&Path>,
        auto: bool,
        verbose: bool,
    ) -> Result<Self> {
        let target_root = resolve_target_root(test_dir)?;
        let source_root = match source_dir {
            Some(dir) if !dir.as_os_str().is_empty() => std::path::absolute(dir)
                .with_context(|| format!("Failed to resolve source path: {}", dir.display()))?,
            _ => default_source_root()?,
        };

        Ok(Self {
            target_root,
            source_root,
            test_mode: is_override(test_dir),
            auto,
            verbose,
        })
    }

    /// Root receiving the `agents/` and `commands/` directories
    #[must_use]
    pub fn target_root(&self) -> &Path {
        &self.target_root
    }

    /// Directory holding the template `agents/` and `commands/` directories
    #[must_use]
    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    /// Whether the target root came from `--test-dir`
    #[must_use]
    pub const fn test_mode(&self) -> bool {
        self.test_mode
    }

    /// Whether the run was triggered by a package-manager hook
    #[must_use]
    pub const fn auto(&self) -> bool {
        self.auto
    }

    /// Whether debug diagnostics are enabled
    #[must_use]
    pub const fn verbose(&self) -> bool {
        self.verbose
    }
}

/// Resolve the target root
///
/// Returns the override made absolute when it is present and non-empty,
/// `<home>/.claude` otherwise. Nothing on disk is touched.
///
/// # Errors
///
/// Returns an error if the home directory is unknown or the override is
/// relative and the current directory cannot be read.
pub fn resolve_target_root(override_path: Option<&Path>) -> Result<PathBuf> {
    match override_path {
        Some(path) if is_override(Some(path)) => std::path::absolute(path)
            .with_context(|| format!("Failed to resolve target path: {}", path.display())),
        _ => {
            let home = dirs::home_dir().ok_or(InstallError::HomeDirNotFound)?;
            Ok(home.join(CLAUDE_DIR_NAME))
        }
    }
}

fn is_override(path: Option<&Path>) -> bool {
    path.is_some_and(|p| !p.as_os_str().is_empty())
}

/// Directory containing the running executable
fn default_source_root() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the installer executable")?;
    let exe = dunce::canonicalize(&exe)
        .with_context(|| format!("Failed to resolve executable path: {}", exe.display()))?;
    exe.parent()
        .map(Path::to_path_buf)
        .with_context(|| format!("Executable has no parent directory: {}", exe.display()))
}
