//! Match session: phase, score and round history.

mod engine;
mod snapshot;
mod types;

pub use engine::MatchSession;
pub use snapshot::MatchSnapshot;
pub use types::{MatchId, MatchPhase, RoundRecord, Score, MATCH_LENGTH};
