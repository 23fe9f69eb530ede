//! Install reporting
//!
//! Turns reports into status lines, then prints them through
//! [`crate::console`]. Building lines is separate from printing so the
//! wording can be checked without capturing stdout.

use super::{CategoryOutcome, CategoryReport, FileStatus, InstallReport};
use crate::category::Category;
use crate::console;

/// Severity of a status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Start of a category
    Step,
    /// Something was done
    Success,
    /// Something worth a look, nothing failed
    Warning,
    /// Something failed
    Error,
}

/// One rendered console line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    /// Severity
    pub level: Level,
    /// Text without decoration
    pub text: String,
}

impl StatusLine {
    fn new(level: Level, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
}

/// Install report renderer
pub struct InstallReporter;

impl InstallReporter {
    /// Status lines for a whole run
    #[must_use]
    pub fn lines(report: &InstallReport) -> Vec<StatusLine> {
        let mut lines: Vec<StatusLine> = report
            .created_dirs
            .iter()
            .map(|dir| {
                StatusLine::new(
                    Level::Success,
                    format!("Created directory: {}", dir.display()),
                )
            })
            .collect();

        for category in &report.categories {
            lines.extend(Self::category_lines(category));
        }

        lines
    }

    /// Status lines for one category
    #[must_use]
    pub fn category_lines(report: &CategoryReport) -> Vec<StatusLine> {
        let category = report.category;
        let mut lines = Vec::new();

        if report.outcome == CategoryOutcome::MissingSource {
            lines.push(StatusLine::new(
                Level::Error,
                format!(
                    "{} directory not found in package: {}",
                    title(category),
                    report.source_dir.display()
                ),
            ));
            return lines;
        }

        lines.push(StatusLine::new(
            Level::Step,
            format!("Installing {}...", category.dir_name()),
        ));

        match &report.outcome {
            CategoryOutcome::Unreadable(message) => {
                lines.push(StatusLine::new(Level::Error, message.clone()));
            }
            CategoryOutcome::Empty => {
                lines.push(StatusLine::new(
                    Level::Warning,
                    format!(
                        "No {category} files found in {}",
                        report.source_dir.display()
                    ),
                ));
            }
            CategoryOutcome::MissingSource => {}
            CategoryOutcome::Synced => {
                if report.has_conflicts() {
                    let names: Vec<&str> = report.conflicts.iter().map(String::as_str).collect();
                    lines.push(StatusLine::new(
                        Level::Warning,
                        format!("Found existing {}: {}", category.dir_name(), names.join(", ")),
                    ));
                }

                for file in &report.files {
                    let line = match &file.status {
                        FileStatus::Installed => StatusLine::new(
                            Level::Success,
                            format!("Installed {category}: {}", file.name),
                        ),
                        FileStatus::Replaced => StatusLine::new(
                            Level::Success,
                            format!("Installed {category}: {} (replaced)", file.name),
                        ),
                        FileStatus::Unchanged => StatusLine::new(
                            Level::Success,
                            format!("Installed {category}: {} (unchanged)", file.name),
                        ),
                        FileStatus::Failed(message) => {
                            StatusLine::new(Level::Error, message.clone())
                        }
                    };
                    lines.push(line);
                }

                if report.has_conflicts() {
                    lines.push(StatusLine::new(
                        Level::Warning,
                        "Some files were overwritten. Previous versions have been replaced.",
                    ));
                }
            }
        }

        lines
    }

    /// Print status lines to the console
    pub fn print(lines: &[StatusLine]) {
        for line in lines {
            match line.level {
                Level::Step => console::step(&line.text),
                Level::Success => console::success(&line.text),
                Level::Warning => console::warning(&line.text),
                Level::Error => console::error(&line.text),
            }
        }
    }
}

const fn title(category: Category) -> &'static str {
    match category {
        Category::Agent => "Agents",
        Category::Command => "Commands",
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::sync::FileResult;

    fn report(outcome: CategoryOutcome) -> CategoryReport {
        CategoryReport::new(
            Category::Agent,
            PathBuf::from("/pkg/agents"),
            PathBuf::from("/root/.claude/agents"),
            outcome,
        )
    }

    fn texts(lines: &[StatusLine]) -> Vec<&str> {
        lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn test_missing_source_is_single_error() {
        let lines = InstallReporter::category_lines(&report(CategoryOutcome::MissingSource));

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].level, Level::Error);
        assert_eq!(
            lines[0].text,
            "Agents directory not found in package: /pkg/agents"
        );
    }

    #[test]
    fn test_empty_category_warns() {
        let lines = InstallReporter::category_lines(&report(CategoryOutcome::Empty));

        assert_eq!(
            texts(&lines),
            ["Installing agents...", "No agent files found in /pkg/agents"]
        );
        assert_eq!(lines[1].level, Level::Warning);
    }

    #[test]
    fn test_conflicts_bracket_file_lines() {
        let mut category = report(CategoryOutcome::Synced);
        category.conflicts.insert("a.md".to_string());
        category.files = vec![
            FileResult {
                name: "a.md".to_string(),
                status: FileStatus::Replaced,
            },
            FileResult {
                name: "b.md".to_string(),
                status: FileStatus::Failed("Failed to copy b.md: denied".to_string()),
            },
        ];

        let lines = InstallReporter::category_lines(&category);

        assert_eq!(
            texts(&lines),
            [
                "Installing agents...",
                "Found existing agents: a.md",
                "Installed agent: a.md (replaced)",
                "Failed to copy b.md: denied",
                "Some files were overwritten. Previous versions have been replaced.",
            ]
        );
        assert_eq!(lines[3].level, Level::Error);
    }

    #[test]
    fn test_created_directories_come_first() {
        let install = InstallReport {
            target_root: PathBuf::from("/t"),
            created_dirs: vec![PathBuf::from("/t/agents")],
            categories: vec![report(CategoryOutcome::MissingSource)],
        };

        let lines = InstallReporter::lines(&install);

        assert_eq!(lines[0].text, "Created directory: /t/agents");
        assert_eq!(lines[0].level, Level::Success);
        assert_eq!(lines.len(), 2);
    }
}
