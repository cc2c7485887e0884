//! Response models.
//!
//! These mirror the JSON documents of the remote API field for field. Every
//! field defaults when absent or `null`, so partial documents decode cleanly.

use serde::{Deserialize, Deserializer};

mod match_dto;
mod matchlist;
mod spectator;
mod timeline;

pub use match_dto::{
    Mastery, Match, Participant, ParticipantIdentity, ParticipantStats, ParticipantTimeline,
    Player, Rune, TeamBans, TeamStats,
};
pub use matchlist::{MatchReference, Matchlist};
pub use spectator::{
    BannedChampion, CurrentGameParticipant, FeaturedGameInfo, FeaturedGames, FeaturedParticipant,
    GameCustomizationObject, GameInfo, Observer, Perks,
};
pub use timeline::{MatchEvent, MatchFrame, MatchParticipantFrame, MatchPosition, MatchTimeline};

/// Decode `null` as the field's default value.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_null_fields_decode_as_defaults() {
        let json = r#"{
            "gameList": [{
                "gameId": 5,
                "gameMode": null,
                "platformId": null,
                "bannedChampions": null,
                "observers": null,
                "participants": [{"summonerName": null, "teamId": 100}]
            }],
            "clientRefreshInterval": 300
        }"#;
        let featured: FeaturedGames = serde_json::from_str(json).expect("Operation should succeed");

        let game = &featured.game_list[0];
        assert_eq!(game.game_id, 5);
        assert_eq!(game.game_mode, "");
        assert_eq!(game.platform_id, "");
        assert!(game.banned_champions.is_empty());
        assert_eq!(game.observers, Observer::default());
        assert_eq!(game.participants[0].summoner_name, "");
        assert_eq!(game.participants[0].team_id, 100);
    }

    #[test]
    fn test_null_collections_in_match() {
        let json = r#"{
            "gameId": 9,
            "participants": null,
            "teams": [{"teamId": 100, "win": null, "bans": null}],
            "participantIdentities": [{"participantId": 1, "player": null}]
        }"#;
        let game: Match = serde_json::from_str(json).expect("Operation should succeed");

        assert!(game.participants.is_empty());
        assert_eq!(game.teams[0].win, "");
        assert!(game.teams[0].bans.is_empty());
        assert!(game.participant_identities[0].player.is_none());
    }

    #[test]
    fn test_null_timeline_maps() {
        let json = r#"{"frames": [{"timestamp": 0, "participantFrames": null, "events": null}], "frameInterval": 60000}"#;
        let timeline: MatchTimeline = serde_json::from_str(json).expect("Operation should succeed");
        assert!(timeline.frames[0].participant_frames.is_empty());
        assert_eq!(timeline.events().count(), 0);
    }
}
