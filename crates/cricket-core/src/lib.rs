//! Cricket Core Library
//!
//! This crate provides the rules, the match engine and the opponent move
//! sources for the bat / ball / wicket game, a cricket-flavoured take on
//! rock-paper-scissors played over a fixed ten-round match.

pub mod commentary;
pub mod error;
pub mod opponent;
pub mod rules;
pub mod session;

pub use commentary::{round_callout, Verdict};
pub use error::MatchError;
pub use opponent::{MoveSource, RandomOpponent, ScriptedOpponent};
pub use rules::{judge, Move, Outcome};
pub use session::{
    MatchId, MatchPhase, MatchSession, MatchSnapshot, RoundRecord, Score, MATCH_LENGTH,
};
