//! Callouts shown after each round and the end-of-match verdict.

use crate::rules::{Move, Outcome};
use crate::session::{RoundRecord, Score};
use serde::{Deserialize, Serialize};

/// Headline for a resolved round
pub fn round_callout(record: &RoundRecord) -> &'static str {
    match (record.outcome, record.human_move, record.opponent_move) {
        (Outcome::Draw, _, _) => "IT'S A DRAW!",
        (Outcome::Win, Move::Bat, _) => "GREAT SHOT!",
        (Outcome::Win, Move::Ball, _) => "BOWLED 'EM!",
        (Outcome::Win, Move::Wicket, _) => "HIT WICKET!",
        (Outcome::Lose, _, Move::Ball) => "YOU GOT BOWLED OUT!",
        (Outcome::Lose, _, Move::Wicket) => "HIT WICKET OUT!",
        (Outcome::Lose, _, Move::Bat) => "YOU GOT SHOT!",
    }
}

/// How a finished match ended for the human player
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Victory,
    Defeat,
    Tied,
}

impl Verdict {
    pub fn from_score(score: Score) -> Self {
        use std::cmp::Ordering;

        match score.human.cmp(&score.opponent) {
            Ordering::Greater => Verdict::Victory,
            Ordering::Less => Verdict::Defeat,
            Ordering::Equal => Verdict::Tied,
        }
    }

    pub fn banner(&self) -> &'static str {
        match self {
            Verdict::Victory => "VICTORY!",
            Verdict::Defeat => "YOU LOSE",
            Verdict::Tied => "IT'S A DRAW!",
        }
    }
}
