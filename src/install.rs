//! The install command: runs the installer and prints its outcome

use anyhow::Context;
use vspec_install::console;
use vspec_install::{InstallConfig, InstallError, InstallReport, InstallReporter, Installer};

const DOCS_URL: &str = "https://github.com/yiidtw/claude-vspec";
const CLAUDE_CODE_URL: &str = "https://claude.ai/code";

pub struct Install;

impl Install {
    pub fn execute(config: &InstallConfig) -> anyhow::Result<()> {
        console::heading("Claude-VSpec Installation");
        console::info("Installing V-Model specification-driven development agents...");

        if config.test_mode() {
            console::info(&format!(
                "Using test directory: {}",
                config.target_root().display()
            ));
        }

        let report = match Installer::new(config).run() {
            Ok(report) => report,
            Err(e @ InstallError::BaseNotFound(_)) => {
                console::error(&format!(
                    "{e}. Please ensure Claude Code is installed."
                ));
                console::info(&format!(
                    "Visit {CLAUDE_CODE_URL} for installation instructions."
                ));
                return Err(e).context("Installation aborted");
            }
            Err(e) => return Err(e).context("Installation failed"),
        };

        InstallReporter::print(&InstallReporter::lines(&report));
        Self::print_completion(config, &report);

        Ok(())
    }

    fn print_completion(config: &InstallConfig, report: &InstallReport) {
        console::heading("Installation Complete!");

        let copied = report.copied_count();
        if report.is_success() {
            console::success(&format!("{copied} file(s) installed"));
        } else {
            console::warning(&format!(
                "{copied} file(s) installed, some items failed (see above)"
            ));
        }

        if config.test_mode() {
            console::plain("");
            console::plain("Test Installation Details:");
            console::plain(&format!(
                "  Installed to: {}",
                report.target_root.display()
            ));
            console::plain("  This is a TEST installation");
        } else {
            console::plain("");
            console::plain("Usage:");
            console::plain("  1. In Claude Code, type: /vspec-feature \"Your user story\"");
            console::plain("  2. Or mention V-Model in your request");
        }

        console::plain("");
        console::plain(&format!("Documentation: {DOCS_URL}"));

        if config.auto() {
            console::step("Installed via package manager hook. Ready to use!");
        }
    }
}
