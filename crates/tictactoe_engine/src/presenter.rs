//! Capability interface between the core and whatever shows the game.
//!
//! The core never depends on a toolkit; an adapter implements
//! [`Presenter`] and the [`crate::Controller`] drives it.

use super::{Board, GameError, Move, Outcome, Player};

/// Rendering and input capabilities of a presentation adapter.
pub trait Presenter {
    /// Adapter failure. Must absorb [`GameError`] so the controller can
    /// surface search or session errors through the same channel.
    type Error: From<GameError>;

    /// Draws the current board.
    fn render(&mut self, board: &Board) -> Result<(), Self::Error>;

    /// Tells the user whose turn it is.
    fn announce_turn(&mut self, player: Player) -> Result<(), Self::Error>;

    /// Asks a human for a move. `None` means the user quit.
    fn request_move(&mut self, board: &Board, player: Player) -> Result<Option<Move>, Self::Error>;

    /// Reports a move the session refused; the user is asked again.
    fn reject_move(&mut self, error: &GameError) -> Result<(), Self::Error>;

    /// Shows the final result.
    fn show_outcome(&mut self, outcome: Outcome) -> Result<(), Self::Error>;
}
