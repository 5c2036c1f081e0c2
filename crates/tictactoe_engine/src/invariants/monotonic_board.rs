//! Monotonic board invariant: cells never change once marked.

use super::Invariant;
use crate::{Board, Cell, GameSession};

/// Invariant: replaying the history onto an empty board only ever fills
/// empty cells and reproduces the current board.
pub struct MonotonicBoardInvariant;

impl Invariant<GameSession> for MonotonicBoardInvariant {
    fn holds(session: &GameSession) -> bool {
        let mut reconstructed = Board::new();

        for turn in session.history() {
            if !reconstructed.is_empty(turn.mv) {
                return false;
            }
            reconstructed.set(turn.mv, Cell::Occupied(turn.player));
        }

        reconstructed == *session.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
