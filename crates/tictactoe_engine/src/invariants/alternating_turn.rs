//! Alternating turn invariant: player one, player two, player one, ...

use super::Invariant;
use crate::{GameSession, Player};

/// Invariant: history alternates starting with player one, and the
/// player to move follows from it.
///
/// Once the game is over the player to move stays on the last mover.
pub struct AlternatingTurnInvariant;

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(session: &GameSession) -> bool {
        let history = session.history();

        let alternates = history
            .iter()
            .enumerate()
            .all(|(i, turn)| turn.player == if i % 2 == 0 { Player::One } else { Player::Two });
        if !alternates {
            return false;
        }

        let expected = match history.last() {
            None => Player::One,
            Some(last) if session.is_over() => last.player,
            Some(last) => last.player.opponent(),
        };
        session.to_move() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns starting with player one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Turn};

    #[test]
    fn test_empty_session_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameSession::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let moves: Vec<Move> = [0, 4, 2, 6, 8].iter().filter_map(|&i| Move::from_index(i)).collect();
        let session = GameSession::replay(&moves).unwrap();
        assert!(AlternatingTurnInvariant::holds(&session));
        assert_eq!(session.to_move(), Player::Two);
    }

    #[test]
    fn test_finished_session_keeps_winner_to_move() {
        let moves: Vec<Move> = [0, 3, 1, 4, 2].iter().filter_map(|&i| Move::from_index(i)).collect();
        let session = GameSession::replay(&moves).unwrap();
        assert!(session.is_over());
        assert!(AlternatingTurnInvariant::holds(&session));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut session = GameSession::new();
        session.history.push(Turn::new(Player::One, Move::new(0, 0).unwrap()));
        session.history.push(Turn::new(Player::One, Move::new(1, 1).unwrap()));
        assert!(!AlternatingTurnInvariant::holds(&session));
    }

    #[test]
    fn test_stale_player_to_move_violates() {
        let mut session = GameSession::replay(&[Move::new(0, 0).unwrap()]).unwrap();
        session.to_move = Player::One;
        assert!(!AlternatingTurnInvariant::holds(&session));
    }
}
