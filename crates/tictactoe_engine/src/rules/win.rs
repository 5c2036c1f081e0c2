//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Move, Player};

/// The eight lines: three rows, three columns, two diagonals.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// True iff `player` holds all three cells of some line.
pub fn winner_along(board: &Board, player: Player) -> bool {
    let mark = Cell::Occupied(player);
    LINES
        .iter()
        .any(|line| line.iter().all(|&i| board.get(Move::ALL[i]) == mark))
}

/// Returns the player holding a complete line, if any.
///
/// Player one is checked first; on boards reached by legal play at most
/// one of them can hold a line.
pub fn winner(board: &Board) -> Option<Player> {
    [Player::One, Player::Two]
        .into_iter()
        .find(|&player| winner_along(board, player))
}
