//! Game session: the single owner of a board in play.
//!
//! A session starts empty with player one to move, accepts one move at a
//! time, and freezes once the outcome is decided.

use super::invariants::{InvariantSet, SessionInvariants};
use super::rules::{is_terminal, legal_moves};
use super::{Board, Cell, GameError, Move, Outcome, Player};
use serde::Serialize;
use tracing::{info, instrument, warn};

/// One accepted move and who made it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_new::new)]
pub struct Turn {
    /// The player who moved.
    pub player: Player,
    /// The cell they marked.
    pub mv: Move,
}

/// Board, player to move, and outcome of one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSession {
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) outcome: Outcome,
    pub(crate) history: Vec<Turn>,
}

impl GameSession {
    /// Creates a session with an empty board and player one to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::One,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Rebuilds a session by applying `moves` in order.
    ///
    /// # Errors
    ///
    /// Fails on the first move that [`GameSession::apply`] rejects.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(moves: &[Move]) -> Result<Self, GameError> {
        let mut session = Self::new();
        for &mv in moves {
            session.apply(mv)?;
        }
        Ok(session)
    }

    /// Marks `mv` for the player to move and returns the new outcome.
    ///
    /// The player to move only changes while the game stays in progress.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] if the session already finished.
    /// - [`GameError::Occupied`] if the cell is taken.
    ///
    /// Rejected moves leave the session untouched.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn apply(&mut self, mv: Move) -> Result<Outcome, GameError> {
        if self.outcome.is_over() {
            warn!(outcome = %self.outcome, "Move after game over");
            return Err(GameError::GameOver(self.outcome));
        }
        if !self.board.is_empty(mv) {
            warn!("Cell already occupied");
            return Err(GameError::Occupied(mv));
        }

        let player = self.to_move;
        self.board.set(mv, Cell::Occupied(player));
        self.history.push(Turn::new(player, mv));
        self.outcome = is_terminal(&self.board, player);
        if !self.outcome.is_over() {
            self.to_move = player.opponent();
        }

        debug_assert!(
            SessionInvariants::check_all(self).is_ok(),
            "Session invariants violated after {}",
            mv
        );

        info!(outcome = %self.outcome, "Move accepted");
        Ok(self.outcome)
    }

    /// Same as [`GameSession::apply`] with raw coordinates.
    ///
    /// # Errors
    ///
    /// Also returns [`GameError::OutOfBounds`] for coordinates off the board.
    pub fn apply_at(&mut self, row: usize, col: usize) -> Result<Outcome, GameError> {
        self.apply(Move::new(row, col)?)
    }

    /// Read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose turn it is; after a win, the winner.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// True once no further moves are accepted.
    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    /// Accepted moves in order.
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Empty cells, row-major; empty once the game is over.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_over() {
            Vec::new()
        } else {
            legal_moves(&self.board)
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
