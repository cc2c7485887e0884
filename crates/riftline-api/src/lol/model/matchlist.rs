use serde::{Deserialize, Serialize};

/// One page of an account's match history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Matchlist {
    pub start_index: i32,
    pub total_games: i32,
    pub end_index: i32,
    #[serde(deserialize_with = "super::nullable")]
    pub matches: Vec<MatchReference>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchReference {
    pub game_id: i64,
    #[serde(deserialize_with = "super::nullable")]
    pub role: String,
    pub season: i32,
    #[serde(deserialize_with = "super::nullable")]
    pub platform_id: String,
    pub champion: i32,
    pub queue: i32,
    #[serde(deserialize_with = "super::nullable")]
    pub lane: String,
    /// Epoch milliseconds
    pub timestamp: i64,
}
