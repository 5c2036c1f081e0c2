//! History consistency: the board and outcome agree with the move list.

use super::Invariant;
use crate::rules::is_terminal;
use crate::{GameSession, Outcome};

/// Invariant: filled cells equal the number of accepted moves, and the
/// stored outcome is the one the last move produced.
pub struct HistoryConsistentInvariant;

impl Invariant<GameSession> for HistoryConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        let history = session.history();
        if session.board().filled() != history.len() {
            return false;
        }

        let expected = match history.last() {
            None => Outcome::InProgress,
            Some(last) => is_terminal(session.board(), last.player),
        };
        session.outcome() == expected
    }

    fn description() -> &'static str {
        "History length and outcome match the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Player};

    #[test]
    fn test_replayed_draw_holds() {
        let moves: Vec<Move> = [0, 1, 2, 4, 3, 5, 7, 6, 8]
            .iter()
            .filter_map(|&i| Move::from_index(i))
            .collect();
        let session = GameSession::replay(&moves).unwrap();
        assert_eq!(session.outcome(), Outcome::Draw);
        assert!(HistoryConsistentInvariant::holds(&session));
    }

    #[test]
    fn test_wrong_outcome_violates() {
        let mut session = GameSession::replay(&[Move::new(0, 0).unwrap()]).unwrap();
        session.outcome = Outcome::Win(Player::One);
        assert!(!HistoryConsistentInvariant::holds(&session));
    }
}
