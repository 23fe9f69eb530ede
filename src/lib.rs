//! # vspec-install
//!
//! Installs the V-Model specification agents and commands into a Claude
//! configuration directory.
//!
//! The installer copies every markdown template found under the package's
//! `agents/` and `commands/` directories into `<root>/agents` and
//! `<root>/commands`, where `<root>` is `~/.claude` unless overridden.
//! Existing files are overwritten and reported as conflicts.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Template categories handled by the installer
pub mod category;

/// Console presentation helpers
pub mod console;

/// Installation settings resolved from the command line
pub mod config;

/// Error types
pub mod error;

/// Source template discovery
pub mod scanner;

/// Category synchronization and reporting
pub mod sync;

/// Target root checks and directory preparation
pub mod target;

/// Content comparison for conflicting files
pub(crate) mod comparison;

pub use category::Category;
pub use config::InstallConfig;
pub use error::InstallError;
pub use sync::{CategoryReport, InstallReport, InstallReporter, Installer};
