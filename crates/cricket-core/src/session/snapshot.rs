//! Read-only, serializable view of a session.

use super::engine::MatchSession;
use super::types::{MatchId, MatchPhase, RoundRecord, Score, MATCH_LENGTH};
use crate::commentary::Verdict;
use serde::{Deserialize, Serialize};

/// Everything a front end needs to draw the scoreboard and history
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub match_id: MatchId,
    pub phase: MatchPhase,
    pub player_name: Option<String>,
    pub score: Score,
    /// Round shown on the HUD (1-based, capped at `match_length`)
    pub round: usize,
    pub match_length: usize,
    pub history: Vec<RoundRecord>,
    pub verdict: Option<Verdict>,
}

impl From<&MatchSession> for MatchSnapshot {
    fn from(session: &MatchSession) -> Self {
        Self {
            match_id: session.id(),
            phase: session.phase(),
            player_name: session.player_name().map(str::to_string),
            score: session.score(),
            round: session.current_round(),
            match_length: MATCH_LENGTH,
            history: session.history().to_vec(),
            verdict: session.verdict(),
        }
    }
}
