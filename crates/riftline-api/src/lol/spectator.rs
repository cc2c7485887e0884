//! Live game endpoints (spectator-v4).

use crate::error::Result;
use crate::lol::model::{FeaturedGames, GameInfo};
use crate::transport::HttpTransport;

/// Spectator client, obtained from [`RiotClient::spectator`](crate::RiotClient::spectator).
#[derive(Debug, Clone, Copy)]
pub struct SpectatorClient<'a> {
    transport: &'a HttpTransport,
}

impl<'a> SpectatorClient<'a> {
    pub(crate) fn new(transport: &'a HttpTransport) -> Self {
        Self { transport }
    }

    /// Games currently featured in the client.
    pub async fn list_featured(&self) -> Result<FeaturedGames> {
        self.transport
            .get_json(&["lol", "spectator", "v4", "featured-games"], &[])
            .await
    }

    /// The game a summoner is playing right now; `NotFound` when not in game.
    pub async fn get_current(&self, summoner_id: &str) -> Result<GameInfo> {
        self.transport
            .get_json(
                &["lol", "spectator", "v4", "active-games", "by-summoner", summoner_id],
                &[],
            )
            .await
    }
}
