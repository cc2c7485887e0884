//! Match records as returned by match-v4.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A finished match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Match {
    pub game_id: i64,
    #[serde(deserialize_with = "super::nullable")]
    pub participant_identities: Vec<ParticipantIdentity>,
    pub queue_id: i32,
    #[serde(deserialize_with = "super::nullable")]
    pub game_type: String,
    /// Match duration in seconds
    pub game_duration: i64,
    #[serde(deserialize_with = "super::nullable")]
    pub teams: Vec<TeamStats>,
    #[serde(deserialize_with = "super::nullable")]
    pub platform_id: String,
    /// Epoch milliseconds at which the champion select lobby was created
    pub game_creation: i64,
    pub season_id: i32,
    #[serde(deserialize_with = "super::nullable")]
    pub game_version: String,
    pub map_id: i32,
    #[serde(deserialize_with = "super::nullable")]
    pub game_mode: String,
    #[serde(deserialize_with = "super::nullable")]
    pub participants: Vec<Participant>,
}

impl Match {
    pub fn participant(&self, participant_id: i32) -> Option<&Participant> {
        self.participants
            .iter()
            .find(|p| p.participant_id == participant_id)
    }

    /// Identity of a participant; absent for anonymized matches.
    pub fn participant_identity(&self, participant_id: i32) -> Option<&ParticipantIdentity> {
        self.participant_identities
            .iter()
            .find(|p| p.participant_id == participant_id)
    }

    /// Team stats by team id (100 blue, 200 red).
    pub fn team(&self, team_id: i32) -> Option<&TeamStats> {
        self.teams.iter().find(|t| t.team_id == team_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParticipantIdentity {
    pub participant_id: i32,
    pub player: Option<Player>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Player {
    pub profile_icon: i32,
    #[serde(deserialize_with = "super::nullable")]
    pub account_id: String,
    #[serde(deserialize_with = "super::nullable")]
    pub match_history_uri: String,
    #[serde(deserialize_with = "super::nullable")]
    pub current_account_id: String,
    #[serde(deserialize_with = "super::nullable")]
    pub current_platform_id: String,
    #[serde(deserialize_with = "super::nullable")]
    pub summoner_name: String,
    #[serde(deserialize_with = "super::nullable")]
    pub summoner_id: String,
    #[serde(deserialize_with = "super::nullable")]
    pub platform_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamStats {
    pub tower_kills: i32,
    pub rift_herald_kills: i32,
    pub first_blood: bool,
    pub inhibitor_kills: i32,
    #[serde(deserialize_with = "super::nullable")]
    pub bans: Vec<TeamBans>,
    pub first_baron: bool,
    pub first_dragon: bool,
    pub dominion_victory_score: i32,
    pub dragon_kills: i32,
    pub baron_kills: i32,
    pub first_inhibitor: bool,
    pub first_tower: bool,
    pub vilemaw_kills: i32,
    pub first_rift_herald: bool,
    pub team_id: i32,
    /// `"Win"` or `"Fail"`
    #[serde(deserialize_with = "super::nullable")]
    pub win: String,
}

impl TeamStats {
    pub fn won(&self) -> bool {
        self.win == "Win"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamBans {
    pub champion_id: i32,
    pub pick_turn: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Participant {
    pub participant_id: i32,
    pub champion_id: i32,
    #[serde(deserialize_with = "super::nullable")]
    pub runes: Vec<Rune>,
    #[serde(deserialize_with = "super::nullable")]
    pub stats: ParticipantStats,
    pub team_id: i32,
    #[serde(deserialize_with = "super::nullable")]
    pub timeline: ParticipantTimeline,
    pub spell1_id: i32,
    pub spell2_id: i32,
    #[serde(deserialize_with = "super::nullable")]
    pub highest_achieved_season_tier: String,
    #[serde(deserialize_with = "super::nullable")]
    pub masteries: Vec<Mastery>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Rune {
    pub rune_id: i32,
    pub rank: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Mastery {
    pub mastery_id: i32,
    pub rank: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParticipantStats {
    pub participant_id: i32,
    pub win: bool,
    pub champ_level: i32,

    pub kills: i32,
    pub deaths: i32,
    pub assists: i32,
    pub largest_killing_spree: i32,
    pub largest_multi_kill: i32,
    pub killing_sprees: i32,
    pub double_kills: i32,
    pub triple_kills: i32,
    pub quadra_kills: i32,
    pub penta_kills: i32,
    pub unreal_kills: i32,
    pub first_blood_kill: bool,
    pub first_blood_assist: bool,

    pub item0: i32,
    pub item1: i32,
    pub item2: i32,
    pub item3: i32,
    pub item4: i32,
    pub item5: i32,
    pub item6: i32,

    pub total_damage_dealt: i64,
    pub magic_damage_dealt: i64,
    pub physical_damage_dealt: i64,
    pub true_damage_dealt: i64,
    pub largest_critical_strike: i32,
    pub total_damage_dealt_to_champions: i64,
    pub magic_damage_dealt_to_champions: i64,
    pub physical_damage_dealt_to_champions: i64,
    pub true_damage_dealt_to_champions: i64,
    pub total_heal: i64,
    pub total_units_healed: i32,
    pub damage_self_mitigated: i64,
    pub damage_dealt_to_objectives: i64,
    pub damage_dealt_to_turrets: i64,
    pub total_damage_taken: i64,
    pub magical_damage_taken: i64,
    pub physical_damage_taken: i64,
    pub true_damage_taken: i64,

    pub vision_score: i64,
    pub vision_wards_bought_in_game: i32,
    pub sight_wards_bought_in_game: i32,
    pub wards_placed: i32,
    pub wards_killed: i32,

    #[serde(rename = "timeCCingOthers")]
    pub time_ccing_others: i64,
    pub total_time_crowd_control_dealt: i32,
    pub longest_time_spent_living: i32,

    pub gold_earned: i32,
    pub gold_spent: i32,
    pub turret_kills: i32,
    pub inhibitor_kills: i32,
    pub total_minions_killed: i32,
    pub neutral_minions_killed: i32,
    pub neutral_minions_killed_team_jungle: i32,
    pub neutral_minions_killed_enemy_jungle: i32,
    pub first_tower_kill: bool,
    pub first_tower_assist: bool,
    pub first_inhibitor_kill: bool,
    pub first_inhibitor_assist: bool,

    pub combat_player_score: i32,
    pub objective_player_score: i32,
    pub total_player_score: i32,
    pub total_score_rank: i32,

    pub perk0: i32,
    pub perk0_var1: i32,
    pub perk0_var2: i32,
    pub perk0_var3: i32,
    pub perk1: i32,
    pub perk1_var1: i32,
    pub perk1_var2: i32,
    pub perk1_var3: i32,
    pub perk2: i32,
    pub perk2_var1: i32,
    pub perk2_var2: i32,
    pub perk2_var3: i32,
    pub perk3: i32,
    pub perk3_var1: i32,
    pub perk3_var2: i32,
    pub perk3_var3: i32,
    pub perk4: i32,
    pub perk4_var1: i32,
    pub perk4_var2: i32,
    pub perk4_var3: i32,
    pub perk5: i32,
    pub perk5_var1: i32,
    pub perk5_var2: i32,
    pub perk5_var3: i32,
    pub perk_primary_style: i32,
    pub perk_sub_style: i32,
    pub stat_perk0: i32,
    pub stat_perk1: i32,
    pub stat_perk2: i32,
}

impl ParticipantStats {
    /// (kills + assists) / deaths, with deaths floored at one.
    pub fn kda(&self) -> f64 {
        f64::from(self.kills + self.assists) / f64::from(self.deaths.max(1))
    }
}

/// Per-phase deltas keyed by minute range (`"0-10"`, `"10-20"`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParticipantTimeline {
    pub participant_id: i32,
    #[serde(deserialize_with = "super::nullable")]
    pub cs_diff_per_min_deltas: HashMap<String, f64>,
    #[serde(deserialize_with = "super::nullable")]
    pub damage_taken_per_min_deltas: HashMap<String, f64>,
    #[serde(deserialize_with = "super::nullable")]
    pub role: String,
    #[serde(deserialize_with = "super::nullable")]
    pub damage_taken_diff_per_min_deltas: HashMap<String, f64>,
    #[serde(deserialize_with = "super::nullable")]
    pub xp_per_min_deltas: HashMap<String, f64>,
    #[serde(deserialize_with = "super::nullable")]
    pub xp_diff_per_min_deltas: HashMap<String, f64>,
    #[serde(deserialize_with = "super::nullable")]
    pub lane: String,
    #[serde(deserialize_with = "super::nullable")]
    pub creeps_per_min_deltas: HashMap<String, f64>,
    #[serde(deserialize_with = "super::nullable")]
    pub gold_per_min_deltas: HashMap<String, f64>,
}
