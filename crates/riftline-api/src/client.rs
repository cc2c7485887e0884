//! Entry point tying configuration, transport and endpoint clients together.

use crate::config::ClientConfig;
use crate::error::Result;
use crate::lol::{MatchClient, SpectatorClient};
use crate::region::Region;
use crate::transport::HttpTransport;

/// Client for the match and spectator APIs of one region.
///
/// Cloning is cheap; clones share the underlying connection pool.
///
/// ```rust,no_run
/// use riftline_api::{ClientConfig, Region, RiotClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = RiotClient::new(ClientConfig::new("RGAPI-...", Region::EUW1))?;
///
///     let featured = client.spectator().list_featured().await?;
///     for game in &featured.game_list {
///         println!("{} on map {}", game.game_mode, game.map_id);
///     }
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RiotClient {
    transport: HttpTransport,
    region: Region,
}

impl RiotClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        tracing::debug!(
            "Created API client for region {} at {}",
            config.region,
            transport.base_url()
        );
        Ok(Self {
            transport,
            region: config.region,
        })
    }

    /// Build a client from `RIFTLINE_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn transport(&self) -> &HttpTransport {
        &self.transport
    }

    pub fn matches(&self) -> MatchClient<'_> {
        MatchClient::new(&self.transport)
    }

    pub fn spectator(&self) -> SpectatorClient<'_> {
        SpectatorClient::new(&self.transport)
    }
}
