//! League of Legends endpoint clients and response models.

mod match_v4;
pub mod model;
mod spectator;

pub use match_v4::{MATCHLIST_PAGE_SIZE, MatchClient, MatchListOptions};
pub use spectator::SpectatorClient;
