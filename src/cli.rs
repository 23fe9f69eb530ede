use clap::Parser;
use std::path::PathBuf;

/// Claude V-Model specification installer
///
/// Installs the V-Model agents and commands into your Claude Code configuration directory (~/.claude)
#[derive(Parser, Debug)]
#[command(name = "vspec-install")]
#[command(about, long_about = None, version)]
pub struct Cli {
    /// Install into PATH instead of ~/.claude and skip the Claude Code installation check
    #[arg(long, value_name = "PATH")]
    pub test_dir: Option<PathBuf>,

    /// Mark the run as triggered by a package-manager hook
    #[arg(long)]
    pub auto: bool,

    /// Directory containing the agents/ and commands/ templates (default: next to the executable)
    #[arg(long, value_name = "PATH", env = "VSPEC_SOURCE_DIR")]
    pub source_dir: Option<PathBuf>,

    /// Enable verbose diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
