//! riftline binary entry point.
//!
//! Parses arguments, initializes logging and hands off to the command
//! handlers in the library.

use anyhow::Result;
use clap::Parser;
use riftline_cli::{Cli, commands};
use tracing::Level;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --log-level when set
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(Level::from(cli.log_level).as_str())
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    commands::run(cli).await
}
