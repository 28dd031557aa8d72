//! Session types.

use crate::rules::{Move, Outcome};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Number of rounds in a match
pub const MATCH_LENGTH: usize = 10;

/// Unique match identifier
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(Uuid);

impl MatchId {
    /// Create a new random match ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for MatchId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for MatchId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl fmt::Debug for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MatchId({})", self.0)
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a session is in its lifecycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPhase {
    /// No player has logged in
    #[default]
    NotStarted,
    InProgress,
    /// All rounds played; terminal until restart or quit
    Finished,
}

impl MatchPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchPhase::NotStarted => "not started",
            MatchPhase::InProgress => "in progress",
            MatchPhase::Finished => "finished",
        }
    }
}

impl fmt::Display for MatchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Cumulative score: rounds won by each side
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub human: u32,
    pub opponent: u32,
}

impl Score {
    pub fn new(human: u32, opponent: u32) -> Self {
        Self { human, opponent }
    }

    /// Credit the winner of a round. Draws change nothing.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.human += 1,
            Outcome::Lose => self.opponent += 1,
            Outcome::Draw => {}
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.human, self.opponent)
    }
}

/// One resolved round. Never modified after creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based position in the match
    pub round: usize,
    pub human_move: Move,
    pub opponent_move: Move,
    pub outcome: Outcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_id_generation() {
        let id1 = MatchId::new();
        let id2 = MatchId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_match_id_parse_roundtrip() {
        let id = MatchId::new();
        let parsed: MatchId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
        assert!("not-a-uuid".parse::<MatchId>().is_err());
    }

    #[test]
    fn test_score_ignores_draws() {
        let mut score = Score::default();
        score.record(Outcome::Win);
        score.record(Outcome::Draw);
        score.record(Outcome::Lose);
        score.record(Outcome::Win);
        assert_eq!(score, Score::new(2, 1));
        assert_eq!(score.to_string(), "2-1");
    }

    #[test]
    fn test_phase_serialization() {
        let json = serde_json::to_string(&MatchPhase::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
        assert_eq!(MatchPhase::default(), MatchPhase::NotStarted);
    }

    #[test]
    fn test_round_record_json_shape() {
        let record = RoundRecord {
            round: 1,
            human_move: Move::Bat,
            opponent_move: Move::Ball,
            outcome: Outcome::Win,
        };
        let value = serde_json::to_value(record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "round": 1,
                "human_move": "bat",
                "opponent_move": "ball",
                "outcome": "win",
            })
        );
    }
}
