//! Full-depth negamax over the tic-tac-toe game tree.

use super::super::rules::{is_full, legal_moves, winner_along};
use super::super::{Board, GameError, Move, Player};
use super::{Strategy, StrategyKind, ensure_playable};
use tracing::{debug, instrument};

/// Scores `board` from `player`'s point of view, `player` to move.
///
/// +1 if `player` already holds a line, -1 if the opponent does, 0 for a
/// full board, otherwise the best negated score over every reply. Depth
/// is bounded by the nine cells.
pub fn negamax(board: &Board, player: Player) -> i8 {
    if winner_along(board, player) {
        return 1;
    }
    let opponent = player.opponent();
    if winner_along(board, opponent) {
        return -1;
    }
    if is_full(board) {
        return 0;
    }

    Move::ALL
        .iter()
        .filter(|&&mv| board.is_empty(mv))
        .map(|&mv| -negamax(&board.with_mark(mv, player), opponent))
        .max()
        .unwrap_or(0)
}

/// Plays a move maximizing the negamax score.
///
/// Ties go to an immediately winning move, then to the first move in
/// row-major order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Exhaustive;

impl Exhaustive {
    /// Negamax score of each legal move for `player`, row-major.
    #[instrument(skip(self, board), fields(board = %board))]
    pub fn scores(&self, board: &Board, player: Player) -> Vec<(Move, i8)> {
        let opponent = player.opponent();
        legal_moves(board)
            .into_iter()
            .map(|mv| (mv, -negamax(&board.with_mark(mv, player), opponent)))
            .collect()
    }
}

impl Strategy for Exhaustive {
    #[instrument(skip(self, board), fields(board = %board))]
    fn choose_move(&mut self, board: &Board, player: Player) -> Result<Move, GameError> {
        ensure_playable(board)?;

        let moves = legal_moves(board);
        if let Some(&mv) = moves
            .iter()
            .find(|&&mv| winner_along(&board.with_mark(mv, player), player))
        {
            debug!(%mv, "Immediate win");
            return Ok(mv);
        }

        let mut best: Option<(Move, i8)> = None;
        for (mv, score) in self.scores(board, player) {
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((mv, score));
            }
        }

        let (mv, score) = best.ok_or(GameError::NoLegalMoves)?;
        debug!(%mv, score, "Best negamax move");
        Ok(mv)
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Exhaustive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negamax_terminal_scores() {
        let won: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(negamax(&won, Player::One), 1);
        assert_eq!(negamax(&won, Player::Two), -1);

        let drawn: Board = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(negamax(&drawn, Player::One), 0);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        assert_eq!(negamax(&Board::new(), Player::One), 0);
    }

    #[test]
    fn test_takes_the_winning_cell() {
        // X to move with two in the middle row.
        let board: Board = "O.O/XX./...".parse().unwrap();
        let mv = Exhaustive.choose_move(&board, Player::One).unwrap();
        assert_eq!(mv, Move::new(1, 2).unwrap());
    }

    #[test]
    fn test_blocks_a_threat() {
        // O threatens the top row, X has nothing to complete.
        let board: Board = "OO./.X./..X".parse().unwrap();
        let mv = Exhaustive.choose_move(&board, Player::One).unwrap();
        assert_eq!(mv, Move::new(0, 2).unwrap());
    }

    #[test]
    fn test_empty_board_tie_breaks_row_major() {
        let mv = Exhaustive.choose_move(&Board::new(), Player::One).unwrap();
        assert_eq!(mv, Move::new(0, 0).unwrap());
    }

    #[test]
    fn test_scores_cover_legal_moves() {
        let board: Board = "XO./.../...".parse().unwrap();
        let scores = Exhaustive.scores(&board, Player::One);
        assert_eq!(scores.len(), 7);
        assert!(scores.iter().all(|(_, s)| (-1..=1).contains(s)));
        assert!(scores.iter().any(|(_, s)| *s == 1));
    }
}
