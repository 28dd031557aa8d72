//! Move source trait definition.

use crate::rules::Move;

/// Trait for anything that can pick the opponent's next move
///
/// Implementations:
/// - RandomOpponent for real play (uniform over the three moves)
/// - ScriptedOpponent for tests and demos
pub trait MoveSource: Send {
    /// Pick the move for the coming round
    fn next_move(&mut self) -> Move;
}

impl<S: MoveSource + ?Sized> MoveSource for Box<S> {
    fn next_move(&mut self) -> Move {
        (**self).next_move()
    }
}
