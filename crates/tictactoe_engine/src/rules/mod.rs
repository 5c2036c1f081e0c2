//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board according
//! to tic-tac-toe rules. Rules are separated from board storage so the
//! session, the search and the invariants all share one definition.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{winner, winner_along};

use super::{Board, Move, Outcome, Player};
use tracing::instrument;

/// Classifies the board after `last_mover` played.
///
/// Only the mover is checked for a win, since a move can only complete
/// a line for its own mark.
#[instrument(skip(board), fields(board = %board))]
pub fn is_terminal(board: &Board, last_mover: Player) -> Outcome {
    if winner_along(board, last_mover) {
        Outcome::Win(last_mover)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

/// Every empty cell, in row-major order.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    Move::ALL
        .iter()
        .copied()
        .filter(|&mv| board.is_empty(mv))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legal_moves_empty_board() {
        let moves = legal_moves(&Board::new());
        assert_eq!(moves, Move::ALL.to_vec());
    }

    #[test]
    fn test_legal_moves_filters_occupied() {
        let board: Board = "X../.O./...".parse().unwrap();
        let moves = legal_moves(&board);
        assert_eq!(moves.len(), 7);
        assert!(!moves.contains(&Move::new(0, 0).unwrap()));
        assert!(!moves.contains(&Move::new(1, 1).unwrap()));
        assert!(moves.windows(2).all(|w| w[0].index() < w[1].index()));
    }

    #[test]
    fn test_terminal_win_for_mover_only() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(is_terminal(&board, Player::One), Outcome::Win(Player::One));
        assert_eq!(is_terminal(&board, Player::Two), Outcome::InProgress);
    }

    #[test]
    fn test_terminal_draw() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(is_terminal(&board, Player::One), Outcome::Draw);
    }

    #[test]
    fn test_win_on_last_cell_is_not_draw() {
        let board: Board = "XOX/OXO/OXX".parse().unwrap();
        assert_eq!(is_terminal(&board, Player::One), Outcome::Win(Player::One));
    }
}
