//! Error types for the tic-tac-toe engine.
//!
//! Every error here is a contract violation by the caller. None of them
//! mutate state; the adapter decides whether to re-prompt or give up.

use super::action::Move;
use super::types::Outcome;

/// Error raised by the rules engine, move search or session.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// Coordinates fall outside `0..3`.
    #[display("Move ({row}, {col}) is off the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The targeted cell is already marked.
    #[display("Cell {} is already occupied", _0)]
    Occupied(Move),

    /// The session finished and accepts no more moves.
    #[display("Game is already over: {}", _0)]
    GameOver(Outcome),

    /// Move search was asked to play on a board with no empty cell.
    #[display("No legal moves on a terminal board")]
    NoLegalMoves,

    /// Text did not name a cell.
    #[display("Cannot read a move from {:?}", _0)]
    ParseMove(String),

    /// Text did not describe a board.
    #[display("Cannot read a board: {}", _0)]
    ParseBoard(String),
}

impl std::error::Error for GameError {}

/// Broad category of a [`GameError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum ErrorKind {
    /// Illegal coordinates, an occupied cell, or unreadable input.
    InvalidMove,
    /// Mutating a session that already finished.
    InvalidOperation,
    /// Searching a board that has no legal move.
    PreconditionViolation,
}

impl GameError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::OutOfBounds { .. }
            | GameError::Occupied(_)
            | GameError::ParseMove(_)
            | GameError::ParseBoard(_) => ErrorKind::InvalidMove,
            GameError::GameOver(_) => ErrorKind::InvalidOperation,
            GameError::NoLegalMoves => ErrorKind::PreconditionViolation,
        }
    }
}
