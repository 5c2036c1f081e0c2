//! One-ply win/block heuristic with a random fallback.

use super::super::rules::{legal_moves, winner_along};
use super::super::{Board, GameError, Move, Player};
use super::{Strategy, StrategyKind, ensure_playable};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Wins if it can, blocks if it must, otherwise plays at random.
///
/// Looks one ply ahead only, so forks go unnoticed.
pub struct Heuristic {
    rng: StdRng,
}

impl Heuristic {
    /// Creates a heuristic seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a heuristic whose random fallback is reproducible.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// First legal move completing a line for `player`.
    fn completing_move(board: &Board, moves: &[Move], player: Player) -> Option<Move> {
        moves
            .iter()
            .copied()
            .find(|&mv| winner_along(&board.with_mark(mv, player), player))
    }
}

impl Default for Heuristic {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Heuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Heuristic").finish_non_exhaustive()
    }
}

impl Strategy for Heuristic {
    #[instrument(skip(self, board), fields(board = %board))]
    fn choose_move(&mut self, board: &Board, player: Player) -> Result<Move, GameError> {
        ensure_playable(board)?;
        let moves = legal_moves(board);

        if let Some(mv) = Self::completing_move(board, &moves, player) {
            debug!(%mv, "Winning move");
            return Ok(mv);
        }
        if let Some(mv) = Self::completing_move(board, &moves, player.opponent()) {
            debug!(%mv, "Blocking move");
            return Ok(mv);
        }

        let mv = moves
            .choose(&mut self.rng)
            .copied()
            .ok_or(GameError::NoLegalMoves)?;
        debug!(%mv, "Random move");
        Ok(mv)
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Heuristic
    }
}
