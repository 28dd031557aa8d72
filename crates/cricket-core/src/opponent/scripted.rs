//! Scripted opponent for testing.

use super::traits::MoveSource;
use crate::rules::Move;

/// Replays a fixed list of moves, wrapping around at the end
#[derive(Clone, Debug)]
pub struct ScriptedOpponent {
    moves: Vec<Move>,
    next: usize,
}

impl ScriptedOpponent {
    /// Create from a move list. An empty list always plays bat.
    pub fn new(moves: impl Into<Vec<Move>>) -> Self {
        Self {
            moves: moves.into(),
            next: 0,
        }
    }

    /// Always play the same move
    pub fn always(m: Move) -> Self {
        Self::new(vec![m])
    }
}

impl MoveSource for ScriptedOpponent {
    fn next_move(&mut self) -> Move {
        let Some(&m) = self.moves.get(self.next) else {
            return Move::Bat;
        };
        self.next = (self.next + 1) % self.moves.len();
        m
    }
}
