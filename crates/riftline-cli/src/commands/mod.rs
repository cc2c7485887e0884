//! Command dispatch for the `riftline` binary.

pub mod matches;
pub mod spectator;

use anyhow::Result;
use riftline_api::RiotClient;

use crate::{Cli, Commands};

/// Run the parsed command line against the API.
pub async fn run(cli: Cli) -> Result<()> {
    let client = RiotClient::new(cli.client_config()?)?;
    tracing::debug!("Using region {}", client.region());
    let style = cli.output_style();

    match cli.command {
        Commands::Match(cmd) => matches::handle(&client, cmd, cli.format, &style).await,
        Commands::Spectator(cmd) => spectator::handle(&client, cmd, cli.format, &style).await,
    }
}
