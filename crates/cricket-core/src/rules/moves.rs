//! The three cricket moves.

use crate::error::MatchError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A move a player can make in one round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Bat,
    Ball,
    Wicket,
}

impl Move {
    /// Every move, in the order the UI presents them
    pub const ALL: [Move; 3] = [Move::Bat, Move::Ball, Move::Wicket];

    /// The move this one defeats.
    ///
    /// Bat beats ball (a shot), ball beats wicket (bowled), wicket beats
    /// bat (hit wicket). The relation is a 3-cycle, so no move defeats
    /// itself and no two moves defeat each other.
    pub fn defeats(&self) -> Move {
        match self {
            Move::Bat => Move::Ball,
            Move::Ball => Move::Wicket,
            Move::Wicket => Move::Bat,
        }
    }

    /// Check if this move beats the other
    pub fn beats(&self, other: &Move) -> bool {
        self.defeats() == *other
    }

    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Move::Bat => "bat",
            Move::Ball => "ball",
            Move::Wicket => "wicket",
        }
    }

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            Move::Bat => "BAT",
            Move::Ball => "BALL",
            Move::Wicket => "WICKET",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Move::Bat => "🏏",
            Move::Ball => "⚾",
            Move::Wicket => "🥅",
        }
    }
}

impl FromStr for Move {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bat" => Ok(Move::Bat),
            "ball" => Ok(Move::Ball),
            "wicket" => Ok(Move::Wicket),
            _ => Err(MatchError::InvalidMove(s.to_string())),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
