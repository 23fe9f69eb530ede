//! Color-coded status lines
//!
//! All user-facing output goes through these helpers so the core never
//! prints directly. Coloring honors `NO_COLOR` and `CLICOLOR` through
//! [`colored`].

use colored::Colorize;

/// Print a plain line
pub fn plain(message: &str) {
    println!("{message}");
}

/// Print a bold section heading preceded by a blank line
pub fn heading(message: &str) {
    println!("\n{}", message.bold());
}

/// Print a blue step line preceded by a blank line
pub fn step(message: &str) {
    println!("\n{}", message.blue());
}

/// Print an informational line
pub fn info(message: &str) {
    println!("{}", format!("i {message}").cyan());
}

/// Print a success line
pub fn success(message: &str) {
    println!("{}", format!("✓ {message}").green());
}

/// Print a warning line
pub fn warning(message: &str) {
    println!("{}", format!("! {message}").yellow());
}

/// Print an error line
pub fn error(message: &str) {
    println!("{}", format!("✗ {message}").red());
}

/// Print a fatal error to stderr
pub fn fatal(message: &str) {
    eprintln!("{}: {message}", "error".red().bold());
}
