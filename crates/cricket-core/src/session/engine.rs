//! The match engine state machine.
//!
//! ```text
//! NotStarted --login--> InProgress --10th round--> Finished
//!      ^                  ^    |                     |
//!      |                  +----+------restart--------+
//!      +-------------------quit (from anywhere)------+
//! ```

use super::types::{MatchId, MatchPhase, RoundRecord, Score, MATCH_LENGTH};
use crate::commentary::Verdict;
use crate::error::MatchError;
use crate::rules::{judge, Move};
use tracing::{debug, info};

/// One player's progress through a match.
///
/// Operations either complete fully or return an error and leave the
/// session untouched. Opponent moves are supplied by the caller, so the
/// engine itself is deterministic.
#[derive(Clone, Debug, Default)]
pub struct MatchSession {
    id: MatchId,
    player_name: Option<String>,
    phase: MatchPhase,
    score: Score,
    history: Vec<RoundRecord>,
}

impl MatchSession {
    /// Create a session with no player, waiting for login
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a match for the named player.
    pub fn login(&mut self, name: &str) -> Result<(), MatchError> {
        if self.phase != MatchPhase::NotStarted {
            return Err(MatchError::illegal("log in", self.phase));
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(MatchError::InvalidName);
        }

        self.player_name = Some(name.to_string());
        self.begin_match();
        info!(match_id = %self.id, player = name, "Player logged in");
        Ok(())
    }

    /// Resolve one round and append it to the history.
    ///
    /// The phase is `Finished` as soon as this returns the final round.
    pub fn resolve_round(
        &mut self,
        human_move: Move,
        opponent_move: Move,
    ) -> Result<RoundRecord, MatchError> {
        self.check_can_play()?;

        let record = RoundRecord {
            round: self.history.len() + 1,
            human_move,
            opponent_move,
            outcome: judge(human_move, opponent_move),
        };
        self.history.push(record);
        self.score.record(record.outcome);

        debug!(
            match_id = %self.id,
            round = record.round,
            human = %human_move,
            opponent = %opponent_move,
            outcome = %record.outcome,
            score = %self.score,
            "Round resolved"
        );

        if self.history.len() == MATCH_LENGTH {
            self.phase = MatchPhase::Finished;
            info!(match_id = %self.id, score = %self.score, "Match finished");
        }

        Ok(record)
    }

    /// Check that a round could be resolved right now, without changing
    /// anything. Callers use this to avoid drawing an opponent move for a
    /// round that would be rejected.
    pub fn check_can_play(&self) -> Result<(), MatchError> {
        if self.phase != MatchPhase::InProgress || self.history.len() >= MATCH_LENGTH {
            return Err(MatchError::illegal("play a round", self.phase));
        }
        Ok(())
    }

    /// Play again with the same player.
    pub fn restart(&mut self) -> Result<(), MatchError> {
        if self.phase == MatchPhase::NotStarted {
            return Err(MatchError::illegal("restart", self.phase));
        }
        self.begin_match();
        info!(match_id = %self.id, "Match restarted");
        Ok(())
    }

    /// Drop the player and return to the login state. Always succeeds.
    pub fn quit(&mut self) {
        if let Some(name) = self.player_name.take() {
            info!(match_id = %self.id, player = %name, "Player quit");
        }
        self.score = Score::default();
        self.history.clear();
        self.phase = MatchPhase::NotStarted;
    }

    fn begin_match(&mut self) {
        self.id = MatchId::new();
        self.score = Score::default();
        self.history.clear();
        self.phase = MatchPhase::InProgress;
    }

    pub fn id(&self) -> MatchId {
        self.id
    }

    pub fn player_name(&self) -> Option<&str> {
        self.player_name.as_deref()
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Resolved rounds, oldest first
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    /// The most recently resolved round
    pub fn last_round(&self) -> Option<&RoundRecord> {
        self.history.last()
    }

    /// Round number shown to the player, capped at the match length
    pub fn current_round(&self) -> usize {
        (self.history.len() + 1).min(MATCH_LENGTH)
    }

    /// Rounds still to be played
    pub fn rounds_remaining(&self) -> usize {
        MATCH_LENGTH - self.history.len()
    }

    /// Final verdict, once the match is finished
    pub fn verdict(&self) -> Option<Verdict> {
        (self.phase == MatchPhase::Finished).then(|| Verdict::from_score(self.score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Outcome;

    fn logged_in(name: &str) -> MatchSession {
        let mut session = MatchSession::new();
        session.login(name).unwrap();
        session
    }

    #[test]
    fn test_new_session_is_not_started() {
        let session = MatchSession::new();
        assert_eq!(session.phase(), MatchPhase::NotStarted);
        assert_eq!(session.player_name(), None);
        assert_eq!(session.score(), Score::default());
        assert!(session.history().is_empty());
        assert_eq!(session.verdict(), None);
    }

    #[test]
    fn test_login_trims_name() {
        let session = logged_in("  Ava \n");
        assert_eq!(session.player_name(), Some("Ava"));
        assert_eq!(session.phase(), MatchPhase::InProgress);
    }

    #[test]
    fn test_login_rejects_blank_name() {
        let mut session = MatchSession::new();
        assert_eq!(session.login("   "), Err(MatchError::InvalidName));
        assert_eq!(session.login(""), Err(MatchError::InvalidName));
        assert_eq!(session.phase(), MatchPhase::NotStarted);
        assert_eq!(session.player_name(), None);
    }

    #[test]
    fn test_login_twice_is_illegal() {
        let mut session = logged_in("Ava");
        let err = session.login("Ben").unwrap_err();
        assert_eq!(
            err,
            MatchError::IllegalState {
                operation: "log in",
                phase: MatchPhase::InProgress
            }
        );
        assert_eq!(session.player_name(), Some("Ava"));
    }

    #[test]
    fn test_round_before_login_is_illegal() {
        let mut session = MatchSession::new();
        assert!(matches!(
            session.resolve_round(Move::Bat, Move::Ball),
            Err(MatchError::IllegalState { .. })
        ));
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_resolve_round_records_and_scores() {
        let mut session = logged_in("Ava");

        let record = session.resolve_round(Move::Wicket, Move::Bat).unwrap();
        assert_eq!(record.round, 1);
        assert_eq!(record.outcome, Outcome::Win);
        assert_eq!(session.score(), Score::new(1, 0));
        assert_eq!(session.last_round(), Some(&record));
        assert_eq!(session.current_round(), 2);
        assert_eq!(session.rounds_remaining(), MATCH_LENGTH - 1);
    }

    #[test]
    fn test_finished_immediately_after_last_round() {
        let mut session = logged_in("Ava");
        for _ in 0..MATCH_LENGTH - 1 {
            session.resolve_round(Move::Ball, Move::Ball).unwrap();
            assert_eq!(session.phase(), MatchPhase::InProgress);
        }
        session.resolve_round(Move::Ball, Move::Wicket).unwrap();
        assert_eq!(session.phase(), MatchPhase::Finished);
        assert_eq!(session.current_round(), MATCH_LENGTH);
        assert_eq!(session.rounds_remaining(), 0);
        assert_eq!(session.verdict(), Some(Verdict::Victory));
    }

    #[test]
    fn test_check_can_play_follows_phase() {
        let mut session = MatchSession::new();
        assert!(session.check_can_play().is_err());

        session.login("Ava").unwrap();
        assert_eq!(session.check_can_play(), Ok(()));

        for _ in 0..MATCH_LENGTH {
            session.resolve_round(Move::Bat, Move::Bat).unwrap();
        }
        assert_eq!(
            session.check_can_play(),
            Err(MatchError::illegal("play a round", MatchPhase::Finished))
        );
    }

    #[test]
    fn test_restart_requires_login() {
        let mut session = MatchSession::new();
        assert!(session.restart().is_err());
        assert_eq!(session.phase(), MatchPhase::NotStarted);
    }

    #[test]
    fn test_restart_issues_new_match_id() {
        let mut session = logged_in("Ava");
        let first = session.id();
        session.resolve_round(Move::Bat, Move::Bat).unwrap();
        session.restart().unwrap();
        assert_ne!(session.id(), first);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_quit_from_not_started_is_noop() {
        let mut session = MatchSession::new();
        session.quit();
        assert_eq!(session.phase(), MatchPhase::NotStarted);
    }
}
