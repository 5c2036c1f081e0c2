//! One-shot move suggestions for a given board.

use serde::Serialize;
use tictactoe_engine::{
    Board, Exhaustive, GameError, Move, Player, StrategyKind, choose_move,
};
use tracing::instrument;

/// A move and its negamax score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoredMove {
    /// Candidate move.
    #[serde(rename = "move")]
    pub mv: Move,
    /// +1 forced win, 0 draw, -1 forced loss for the mover.
    pub score: i8,
}

/// What a strategy would play, and why when it can say.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// Player to move.
    pub player: Player,
    /// Strategy consulted.
    pub strategy: StrategyKind,
    /// Chosen move.
    #[serde(rename = "move")]
    pub mv: Move,
    /// Label of the chosen cell.
    pub label: &'static str,
    /// Every legal move's score, for the exhaustive strategy.
    pub scores: Option<Vec<ScoredMove>>,
}

impl std::fmt::Display for Suggestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} plays {} {}", self.player, self.label, self.mv)?;
        if let Some(scores) = &self.scores {
            for scored in scores {
                write!(f, "\n  {} {:>2}", scored.mv, scored.score)?;
            }
        }
        Ok(())
    }
}

/// The player to move by mark counts: X unless X is ahead.
pub fn infer_player(board: &Board) -> Player {
    if board.count(Player::One) > board.count(Player::Two) {
        Player::Two
    } else {
        Player::One
    }
}

/// Asks `strategy` for a move on `board`.
///
/// # Errors
///
/// [`GameError::NoLegalMoves`] if the board is already decided.
#[instrument(skip(board), fields(board = %board))]
pub fn suggest(
    board: &Board,
    player: Option<Player>,
    strategy: StrategyKind,
    seed: Option<u64>,
) -> Result<Suggestion, GameError> {
    let player = player.unwrap_or_else(|| infer_player(board));
    let mut search = strategy.build(seed);
    let mv = choose_move(board, player, search.as_mut())?;

    let scores = match strategy {
        StrategyKind::Exhaustive => Some(
            Exhaustive
                .scores(board, player)
                .into_iter()
                .map(|(mv, score)| ScoredMove { mv, score })
                .collect(),
        ),
        StrategyKind::Heuristic => None,
    };

    Ok(Suggestion {
        player,
        strategy,
        mv,
        label: mv.label(),
        scores,
    })
}
