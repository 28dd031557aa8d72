//! Application state management.

use cricket_core::{MatchError, MatchSession, MatchSnapshot, Move, MoveSource, RoundRecord};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Shared application state
///
/// The session and the opponent sit behind one lock, so concurrent
/// requests resolve rounds strictly one at a time.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Mutex<AppStateInner>>,
    reveal_delay_ms: u64,
}

struct AppStateInner {
    session: MatchSession,
    opponent: Box<dyn MoveSource>,
}

impl AppState {
    pub fn new(opponent: impl MoveSource + 'static, reveal_delay_ms: u64) -> Self {
        Self {
            inner: Arc::new(Mutex::new(AppStateInner {
                session: MatchSession::new(),
                opponent: Box::new(opponent),
            })),
            reveal_delay_ms,
        }
    }

    /// UI hint: delay before a round's result is announced
    pub fn reveal_delay_ms(&self) -> u64 {
        self.reveal_delay_ms
    }

    // Engine operations never leave a partial update behind, so a
    // poisoned lock still guards a consistent session.
    fn lock(&self) -> MutexGuard<'_, AppStateInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot::from(&self.lock().session)
    }

    pub fn login(&self, name: &str) -> Result<MatchSnapshot, MatchError> {
        let mut inner = self.lock();
        inner.session.login(name)?;
        Ok(MatchSnapshot::from(&inner.session))
    }

    /// Sample the opponent's move and resolve the round in one step
    pub fn play(&self, human_move: Move) -> Result<(RoundRecord, MatchSnapshot), MatchError> {
        let mut inner = self.lock();
        // Rejected plays must not advance the opponent's sequence.
        inner.session.check_can_play()?;
        let opponent_move = inner.opponent.next_move();
        let record = inner.session.resolve_round(human_move, opponent_move)?;
        Ok((record, MatchSnapshot::from(&inner.session)))
    }

    pub fn restart(&self) -> Result<MatchSnapshot, MatchError> {
        let mut inner = self.lock();
        inner.session.restart()?;
        Ok(MatchSnapshot::from(&inner.session))
    }

    pub fn quit(&self) -> MatchSnapshot {
        let mut inner = self.lock();
        inner.session.quit();
        MatchSnapshot::from(&inner.session)
    }
}
