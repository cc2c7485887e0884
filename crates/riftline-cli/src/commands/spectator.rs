//! `riftline spectator` handlers.

use anyhow::{Context, Result};
use riftline_api::{ApiError, RiotClient};

use crate::output::{OutputStyle, current_game_summary, emit, featured_summary};
use crate::{OutputFormat, SpectatorCommands};

pub async fn handle(
    client: &RiotClient,
    cmd: SpectatorCommands,
    format: OutputFormat,
    style: &OutputStyle,
) -> Result<()> {
    let spectator = client.spectator();

    match cmd {
        SpectatorCommands::Featured => {
            let featured = spectator
                .list_featured()
                .await
                .context("Failed to list featured games")?;
            emit(&featured, format, style, featured_summary)
        }
        SpectatorCommands::Current { summoner_id } => {
            match spectator.get_current(&summoner_id).await {
                Ok(game) => emit(&game, format, style, current_game_summary),
                Err(ApiError::NotFound) => {
                    tracing::info!("Summoner {} is not in a game", summoner_id);
                    Ok(())
                }
                Err(e) => Err(e).context("Failed to fetch current game"),
            }
        }
    }
}
