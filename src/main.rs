mod cli;
mod install;

use clap::Parser;
use cli::Cli;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use vspec_install::{InstallConfig, console};

fn main() {
    if let Err(e) = run() {
        console::fatal(&format!("{e:#}"));
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = InstallConfig::new(
        cli.test_dir.as_deref(),
        cli.source_dir.as_deref(),
        cli.auto,
        cli.verbose,
    )?;

    if config.verbose() {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_writer(std::io::stderr)
            .with_target(false)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::debug!("Verbose mode enabled");
    }

    install::Install::execute(&config)
}
