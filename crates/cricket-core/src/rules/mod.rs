//! Move definitions and the outcome rule.

mod moves;
mod outcome;

pub use moves::Move;
pub use outcome::{judge, Outcome};
