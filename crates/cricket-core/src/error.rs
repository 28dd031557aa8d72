//! Match engine errors.

use crate::session::MatchPhase;
use thiserror::Error;

/// Errors from rule parsing and match engine operations.
///
/// Every variant is recoverable: a rejected operation leaves the session
/// exactly as it was before the call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("Invalid move: {0:?} (expected bat, ball or wicket)")]
    InvalidMove(String),

    #[error("Invalid name: player name must not be empty")]
    InvalidName,

    #[error("Cannot {operation} while the match is {phase}")]
    IllegalState {
        operation: &'static str,
        phase: MatchPhase,
    },
}

impl MatchError {
    pub(crate) fn illegal(operation: &'static str, phase: MatchPhase) -> Self {
        MatchError::IllegalState { operation, phase }
    }
}
