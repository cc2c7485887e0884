//! Minute-by-minute match timelines.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchTimeline {
    #[serde(deserialize_with = "super::nullable")]
    pub frames: Vec<MatchFrame>,
    /// Milliseconds between frames
    pub frame_interval: i64,
}

impl MatchTimeline {
    /// All events across frames, in frame order.
    pub fn events(&self) -> impl Iterator<Item = &MatchEvent> {
        self.frames.iter().flat_map(|frame| frame.events.iter())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchFrame {
    /// Keyed by participant id as a string (`"1"` to `"10"`)
    #[serde(deserialize_with = "super::nullable")]
    pub participant_frames: HashMap<String, MatchParticipantFrame>,
    #[serde(deserialize_with = "super::nullable")]
    pub events: Vec<MatchEvent>,
    pub timestamp: i64,
}

impl MatchFrame {
    pub fn participant_frame(&self, participant_id: i32) -> Option<&MatchParticipantFrame> {
        self.participant_frames.get(&participant_id.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchParticipantFrame {
    pub participant_id: i32,
    pub minions_killed: i32,
    pub team_score: i32,
    pub dominion_score: i32,
    pub total_gold: i32,
    pub level: i32,
    pub xp: i32,
    pub current_gold: i32,
    pub position: Option<MatchPosition>,
    pub jungle_minions_killed: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchEvent {
    /// `CHAMPION_KILL`, `ITEM_PURCHASED`, `BUILDING_KILL`, ...
    #[serde(rename = "type")]
    #[serde(deserialize_with = "super::nullable")]
    pub kind: String,
    #[serde(deserialize_with = "super::nullable")]
    pub event_type: String,
    pub timestamp: i64,
    pub participant_id: i32,
    pub killer_id: i32,
    pub victim_id: i32,
    #[serde(deserialize_with = "super::nullable")]
    pub assisting_participant_ids: Vec<i32>,
    pub creator_id: i32,
    pub team_id: i32,
    pub position: Option<MatchPosition>,
    #[serde(deserialize_with = "super::nullable")]
    pub lane_type: String,
    #[serde(deserialize_with = "super::nullable")]
    pub tower_type: String,
    #[serde(deserialize_with = "super::nullable")]
    pub building_type: String,
    #[serde(deserialize_with = "super::nullable")]
    pub ward_type: String,
    #[serde(deserialize_with = "super::nullable")]
    pub monster_type: String,
    #[serde(deserialize_with = "super::nullable")]
    pub monster_sub_type: String,
    #[serde(deserialize_with = "super::nullable")]
    pub ascended_type: String,
    #[serde(deserialize_with = "super::nullable")]
    pub point_captured: String,
    pub skill_slot: i32,
    #[serde(deserialize_with = "super::nullable")]
    pub level_up_type: String,
    pub item_id: i32,
    pub before_id: i32,
    pub after_id: i32,
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_timeline() {
        let json = r#"{
            "frameInterval": 60000,
            "frames": [
                {
                    "timestamp": 0,
                    "participantFrames": {"1": {"participantId": 1, "totalGold": 500, "position": {"x": 560, "y": 581}}},
                    "events": []
                },
                {
                    "timestamp": 60000,
                    "participantFrames": {},
                    "events": [
                        {"type": "ITEM_PURCHASED", "participantId": 1, "itemId": 1055, "timestamp": 2034},
                        {"type": "CHAMPION_KILL", "killerId": 3, "victimId": 7, "assistingParticipantIds": [2, 4]}
                    ]
                }
            ]
        }"#;

        let timeline: MatchTimeline = serde_json::from_str(json).expect("Operation should succeed");
        assert_eq!(timeline.frame_interval, 60000);

        let frame = timeline.frames[0]
            .participant_frame(1)
            .expect("participant frame");
        assert_eq!(frame.total_gold, 500);
        assert_eq!(frame.position, Some(MatchPosition { x: 560, y: 581 }));
        assert!(timeline.frames[0].participant_frame(2).is_none());

        let kinds: Vec<&str> = timeline.events().map(|e| e.kind.as_str()).collect();
        assert_eq!(kinds, ["ITEM_PURCHASED", "CHAMPION_KILL"]);

        let kill = timeline.events().nth(1).expect("kill event");
        assert_eq!(kill.assisting_participant_ids, vec![2, 4]);
    }
}
