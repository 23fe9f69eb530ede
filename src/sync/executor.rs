//! Per-category copy
//!
//! Every eligible template is copied under its own name, overwriting what
//! is there. A failed copy is recorded and the remaining files are still
//! attempted. Nothing is rolled back.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::conflicts::detect_conflicts;
use super::{CategoryOutcome, CategoryReport, FileResult, FileStatus};
use crate::category::Category;
use crate::comparison::{is_same_file, same_content};
use crate::error::InstallError;
use crate::scanner::EligibleFiles;

/// Copy all templates of `source_dir` into `target_dir`
#[must_use]
pub fn copy_all(source_dir: &Path, target_dir: &Path, category: Category) -> CategoryReport {
    let mut report = CategoryReport::new(
        category,
        source_dir.to_path_buf(),
        target_dir.to_path_buf(),
        CategoryOutcome::Synced,
    );

    let files = match EligibleFiles::new(source_dir).collect() {
        Ok(files) => files,
        Err(e) => {
            let err = InstallError::ListSource {
                path: source_dir.to_path_buf(),
                message: format!("{e:#}"),
            };
            debug!(%category, error = %err, "listing failed");
            report.outcome = CategoryOutcome::Unreadable(err.to_string());
            return report;
        }
    };

    debug!(%category, count = files.len(), source = %source_dir.display(), "eligible files");

    if files.is_empty() {
        report.outcome = CategoryOutcome::Empty;
        return report;
    }

    report.conflicts = detect_conflicts(target_dir, &files);

    for file in &files {
        let Some(file_name) = file.file_name() else {
            continue;
        };
        let name = file_name.to_string_lossy().into_owned();
        let dest = target_dir.join(file_name);

        if is_same_file(file, &dest) {
            debug!(%category, file = %name, "source is the destination, not copying");
            report.files.push(FileResult {
                name,
                status: FileStatus::Unchanged,
            });
            continue;
        }

        // Must be decided before the copy replaces the destination
        let previous = if report.conflicts.contains(&name) {
            if same_content(file, &dest) {
                FileStatus::Unchanged
            } else {
                FileStatus::Replaced
            }
        } else {
            FileStatus::Installed
        };

        let status = match fs::copy(file, &dest) {
            Ok(bytes) => {
                debug!(%category, file = %name, bytes, "copied");
                previous
            }
            Err(source) => {
                let err = InstallError::Copy {
                    name: name.clone(),
                    source,
                };
                debug!(%category, error = %err, "copy failed");
                FileStatus::Failed(err.to_string())
            }
        };

        report.files.push(FileResult { name, status });
    }

    report
}
