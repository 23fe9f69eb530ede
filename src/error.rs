//! Error types for the installer

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using `anyhow::Error`
pub type Result<T> = anyhow::Result<T>;

/// Failures the installer distinguishes when reporting
#[derive(Error, Debug)]
pub enum InstallError {
    /// No home directory to derive the default target root from
    #[error("Could not determine the home directory")]
    HomeDirNotFound,

    /// The default target root does not exist
    #[error("Claude Code directory not found: {}", .0.display())]
    BaseNotFound(PathBuf),

    /// A category directory could not be created under the target root
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        /// Directory that was being created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A source category directory could not be read
    #[error("Failed to list {}: {message}", path.display())]
    ListSource {
        /// Source directory
        path: PathBuf,
        /// Underlying error message
        message: String,
    },

    /// A single template could not be copied
    #[error("Failed to copy {name}: {source}")]
    Copy {
        /// File name of the template
        name: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}
