//! # riftline-api
//!
//! Typed async client for the League of Legends match history (match-v4) and
//! live game (spectator-v4) web APIs.
//!
//! ## Request handling
//!
//! Every call formats the endpoint path, issues an authenticated `GET`
//! (`X-Riot-Token` header) and decodes the JSON body into the models in
//! [`lol::model`]. Non-success statuses map onto [`ApiError`]:
//!
//! - `429 Too Many Requests` waits for `Retry-After` and retries (bounded)
//! - `503 Service Unavailable` retries once, then surfaces
//! - `404 Not Found` surfaces as [`ApiError::NotFound`]
//! - statuses outside the known table surface as [`ApiError::Unknown`]
//!
//! See [`RetryPolicy`] for the knobs.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use futures::TryStreamExt;
//! use riftline_api::{ClientConfig, Region, RiotClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RiotClient::new(ClientConfig::new("RGAPI-...", Region::NA1))?;
//!
//!     let game = client.matches().get(3_456_789_012).await?;
//!     println!("{} lasted {}s", game.game_mode, game.game_duration);
//!
//!     let matches = client.matches();
//!     let history: Vec<_> = matches.list_stream("encrypted-account-id").try_collect().await?;
//!     println!("{} games on record", history.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! ```rust,no_run
//! use riftline_api::{ApiError, RiotClient};
//!
//! async fn current_game(client: &RiotClient, summoner_id: &str) {
//!     match client.spectator().get_current(summoner_id).await {
//!         Ok(game) => println!("In game {} for {}s", game.game_id, game.game_length),
//!         Err(ApiError::NotFound) => println!("Not in game"),
//!         Err(ApiError::RateLimited { retry_after }) => {
//!             eprintln!("Still rate limited, hint: {retry_after:?}");
//!         }
//!         Err(e) => eprintln!("Request failed: {e}"),
//!     }
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod lol;
pub mod region;
pub mod retry;
pub mod transport;

pub use client::RiotClient;
pub use config::ClientConfig;
pub use error::{ApiError, Result};
pub use lol::{MatchClient, MatchListOptions, SpectatorClient};
pub use region::Region;
pub use retry::RetryPolicy;
