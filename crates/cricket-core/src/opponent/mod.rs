//! Opponent move sources.
//!
//! The engine never picks moves itself; whoever drives the game loop
//! samples the opponent's move from a [`MoveSource`] and passes it in.

mod random;
mod scripted;
mod traits;

pub use random::RandomOpponent;
pub use scripted::ScriptedOpponent;
pub use traits::MoveSource;
