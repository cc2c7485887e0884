//! Live game data from spectator-v4.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeaturedGames {
    #[serde(deserialize_with = "super::nullable")]
    pub game_list: Vec<FeaturedGameInfo>,
    /// Suggested seconds to wait before refreshing
    pub client_refresh_interval: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeaturedGameInfo {
    pub game_id: i64,
    #[serde(deserialize_with = "super::nullable")]
    pub game_mode: String,
    #[serde(deserialize_with = "super::nullable")]
    pub game_type: String,
    /// Seconds elapsed since the game started
    pub game_length: i64,
    pub game_start_time: i64,
    pub game_queue_config_id: i64,
    pub map_id: i64,
    #[serde(deserialize_with = "super::nullable")]
    pub platform_id: String,
    #[serde(deserialize_with = "super::nullable")]
    pub banned_champions: Vec<BannedChampion>,
    #[serde(deserialize_with = "super::nullable")]
    pub observers: Observer,
    #[serde(deserialize_with = "super::nullable")]
    pub participants: Vec<FeaturedParticipant>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeaturedParticipant {
    pub bot: bool,
    pub champion_id: i64,
    pub profile_icon_id: i64,
    #[serde(deserialize_with = "super::nullable")]
    pub summoner_name: String,
    pub team_id: i64,
    pub spell1_id: i64,
    pub spell2_id: i64,
}

/// The game a summoner is currently playing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameInfo {
    pub game_id: i64,
    #[serde(deserialize_with = "super::nullable")]
    pub game_type: String,
    pub game_start_time: i64,
    pub map_id: i64,
    pub game_length: i64,
    #[serde(deserialize_with = "super::nullable")]
    pub platform_id: String,
    #[serde(deserialize_with = "super::nullable")]
    pub game_mode: String,
    #[serde(deserialize_with = "super::nullable")]
    pub banned_champions: Vec<BannedChampion>,
    pub game_queue_config_id: i64,
    #[serde(deserialize_with = "super::nullable")]
    pub observers: Observer,
    #[serde(deserialize_with = "super::nullable")]
    pub participants: Vec<CurrentGameParticipant>,
}

impl GameInfo {
    pub fn participant(&self, summoner_id: &str) -> Option<&CurrentGameParticipant> {
        self.participants
            .iter()
            .find(|p| p.summoner_id == summoner_id)
    }

    pub fn team(&self, team_id: i64) -> impl Iterator<Item = &CurrentGameParticipant> {
        self.participants.iter().filter(move |p| p.team_id == team_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CurrentGameParticipant {
    pub champion_id: i64,
    #[serde(deserialize_with = "super::nullable")]
    pub perks: Perks,
    pub profile_icon_id: i64,
    pub bot: bool,
    pub team_id: i64,
    #[serde(deserialize_with = "super::nullable")]
    pub summoner_name: String,
    #[serde(deserialize_with = "super::nullable")]
    pub summoner_id: String,
    pub spell1_id: i64,
    pub spell2_id: i64,
    #[serde(deserialize_with = "super::nullable")]
    pub game_customization_objects: Vec<GameCustomizationObject>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Perks {
    #[serde(deserialize_with = "super::nullable")]
    pub perk_ids: Vec<i64>,
    pub perk_style: i64,
    pub perk_sub_style: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameCustomizationObject {
    #[serde(deserialize_with = "super::nullable")]
    pub category: String,
    #[serde(deserialize_with = "super::nullable")]
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BannedChampion {
    pub pick_turn: i32,
    pub champion_id: i64,
    pub team_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Observer {
    /// Key used to decrypt the spectator grid game data
    #[serde(deserialize_with = "super::nullable")]
    pub encryption_key: String,
}
