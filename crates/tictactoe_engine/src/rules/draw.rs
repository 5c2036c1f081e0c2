//! Full-board detection for tic-tac-toe.

use super::super::{Board, Cell};

/// Checks if the board is full (no empty cell left).
///
/// A full board with no winner indicates a draw.
pub fn is_full(board: &Board) -> bool {
    board.cells().all(|(_, cell)| cell != Cell::Empty)
}
