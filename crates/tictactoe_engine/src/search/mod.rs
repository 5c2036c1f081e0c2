//! Move search for automated turns.
//!
//! Two interchangeable strategies implement [`Strategy`]: a one-ply
//! [`Heuristic`] and a full-depth [`Exhaustive`] negamax. Both refuse to
//! play on a board that is already decided.

mod exhaustive;
mod heuristic;

pub use exhaustive::{Exhaustive, negamax};
pub use heuristic::Heuristic;

use super::rules::{is_full, winner};
use super::{Board, GameError, Move, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Capability to pick a move for the player to act.
pub trait Strategy {
    /// Chooses a legal move for `player` on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoLegalMoves`] if the board is already won or full.
    fn choose_move(&mut self, board: &Board, player: Player) -> Result<Move, GameError>;

    /// Which strategy this is.
    fn kind(&self) -> StrategyKind;
}

/// Selectable strategies, as named in configuration.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StrategyKind {
    /// Win if possible, else block, else random.
    #[serde(alias = "weak")]
    #[strum(to_string = "heuristic", serialize = "weak")]
    Heuristic,
    /// Full game-tree negamax; never loses.
    #[serde(alias = "optimal")]
    #[strum(to_string = "exhaustive", serialize = "optimal")]
    Exhaustive,
}

impl StrategyKind {
    /// Builds the strategy. `seed` fixes the heuristic's random fallback.
    #[instrument]
    pub fn build(self, seed: Option<u64>) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Heuristic => Box::new(match seed {
                Some(seed) => Heuristic::seeded(seed),
                None => Heuristic::new(),
            }),
            StrategyKind::Exhaustive => Box::new(Exhaustive),
        }
    }
}

/// Picks a move for `player` using `strategy`.
#[instrument(skip(board, strategy), fields(board = %board, strategy = %strategy.kind()))]
pub fn choose_move(
    board: &Board,
    player: Player,
    strategy: &mut dyn Strategy,
) -> Result<Move, GameError> {
    let mv = strategy.choose_move(board, player)?;
    debug!(%mv, label = mv.label(), "Strategy chose move");
    Ok(mv)
}

/// Fails with [`GameError::NoLegalMoves`] when the board is decided.
pub(crate) fn ensure_playable(board: &Board) -> Result<(), GameError> {
    if winner(board).is_some() || is_full(board) {
        return Err(GameError::NoLegalMoves);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parses_aliases() {
        assert_eq!("weak".parse::<StrategyKind>().unwrap(), StrategyKind::Heuristic);
        assert_eq!("OPTIMAL".parse::<StrategyKind>().unwrap(), StrategyKind::Exhaustive);
        assert_eq!(StrategyKind::Exhaustive.to_string(), "exhaustive");
    }

    #[test]
    fn test_build_reports_kind() {
        for kind in [StrategyKind::Heuristic, StrategyKind::Exhaustive] {
            assert_eq!(kind.build(Some(3)).kind(), kind);
        }
    }

    #[test]
    fn test_choose_move_rejects_won_board() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        let mut strategy = StrategyKind::Exhaustive.build(None);
        assert_eq!(
            choose_move(&board, Player::Two, strategy.as_mut()),
            Err(GameError::NoLegalMoves)
        );
    }

    #[test]
    fn test_choose_move_rejects_full_board() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        let mut strategy = StrategyKind::Heuristic.build(Some(1));
        assert_eq!(
            choose_move(&board, Player::One, strategy.as_mut()),
            Err(GameError::NoLegalMoves)
        );
    }
}
