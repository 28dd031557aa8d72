//! Round outcomes.

use super::Move;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of a round, from the human player's side
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "win",
            Outcome::Lose => "lose",
            Outcome::Draw => "draw",
        }
    }

    /// The same result seen from the opponent's side
    pub fn reversed(&self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify a pair of moves for the human player.
///
/// Equal moves draw; otherwise the human wins exactly when their move
/// defeats the opponent's.
pub fn judge(human: Move, opponent: Move) -> Outcome {
    if human == opponent {
        Outcome::Draw
    } else if human.beats(&opponent) {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bat_beats_ball() {
        assert_eq!(judge(Move::Bat, Move::Ball), Outcome::Win);
        assert_eq!(judge(Move::Ball, Move::Bat), Outcome::Lose);
    }

    #[test]
    fn test_ball_beats_wicket() {
        assert_eq!(judge(Move::Ball, Move::Wicket), Outcome::Win);
        assert_eq!(judge(Move::Wicket, Move::Ball), Outcome::Lose);
    }

    #[test]
    fn test_wicket_beats_bat() {
        assert_eq!(judge(Move::Wicket, Move::Bat), Outcome::Win);
        assert_eq!(judge(Move::Bat, Move::Wicket), Outcome::Lose);
    }

    #[test]
    fn test_equal_moves_draw() {
        for m in Move::ALL {
            assert_eq!(judge(m, m), Outcome::Draw);
        }
    }

    #[test]
    fn test_distinct_pairs_are_antisymmetric() {
        for a in Move::ALL {
            for b in Move::ALL {
                if a == b {
                    continue;
                }
                let forward = judge(a, b);
                let backward = judge(b, a);
                assert_ne!(forward, Outcome::Draw);
                assert_eq!(forward.reversed(), backward, "{a} vs {b}");
                assert!((forward == Outcome::Win) ^ (backward == Outcome::Win));
            }
        }
    }

    #[test]
    fn test_all_outcomes() {
        // All 9 combinations
        let mut wins = 0;
        let mut losses = 0;
        let mut draws = 0;

        for a in Move::ALL {
            for b in Move::ALL {
                match judge(a, b) {
                    Outcome::Win => wins += 1,
                    Outcome::Lose => losses += 1,
                    Outcome::Draw => draws += 1,
                }
            }
        }

        assert_eq!(wins, 3);
        assert_eq!(losses, 3);
        assert_eq!(draws, 3);
    }

    #[test]
    fn test_outcome_reversed_is_involution() {
        for o in [Outcome::Win, Outcome::Lose, Outcome::Draw] {
            assert_eq!(o.reversed().reversed(), o);
        }
    }
}
