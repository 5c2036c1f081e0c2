//! Move coordinates for tic-tac-toe.
//!
//! A [`Move`] names one of the nine cells by row and column. Coordinates
//! are validated at construction, so every `Move` in circulation is on
//! the board; whether the cell is free is the session's question.

use super::error::GameError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A (row, column) pair, each in `0..3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Move {
    row: usize,
    col: usize,
}

const fn at(row: usize, col: usize) -> Move {
    Move { row, col }
}

impl Move {
    /// All 9 cells in row-major order.
    pub const ALL: [Move; 9] = [
        at(0, 0),
        at(0, 1),
        at(0, 2),
        at(1, 0),
        at(1, 1),
        at(1, 2),
        at(2, 0),
        at(2, 1),
        at(2, 2),
    ];

    /// Creates a move, rejecting coordinates off the board.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, GameError> {
        if row > 2 || col > 2 {
            return Err(GameError::OutOfBounds { row, col });
        }
        Ok(at(row, col))
    }

    /// Creates a move from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Converts the move to its row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }

    /// Row, 0 at the top.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column, 0 at the left.
    pub fn col(self) -> usize {
        self.col
    }

    /// Get label for this cell (for display).
    pub fn label(self) -> &'static str {
        const LABELS: [&str; 9] = [
            "top-left",
            "top-center",
            "top-right",
            "middle-left",
            "center",
            "middle-right",
            "bottom-left",
            "bottom-center",
            "bottom-right",
        ];
        LABELS[self.index()]
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl TryFrom<(usize, usize)> for Move {
    type Error = GameError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Move::new(row, col)
    }
}

impl From<Move> for (usize, usize) {
    fn from(mv: Move) -> Self {
        (mv.row, mv.col)
    }
}

impl FromStr for Move {
    type Err = GameError;

    /// Parses `row col` or `row,col` (0-based), a keypad number `1`-`9`
    /// counted row-major from the top-left, or a cell label such as
    /// `center`.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();

        match parts.as_slice() {
            [row, col] => {
                let row = row.parse::<usize>().map_err(|_| unparsable(s))?;
                let col = col.parse::<usize>().map_err(|_| unparsable(s))?;
                Move::new(row, col)
            }
            [single] => {
                if let Ok(num) = single.parse::<usize>() {
                    return num
                        .checked_sub(1)
                        .and_then(Move::from_index)
                        .ok_or_else(|| unparsable(s));
                }
                let wanted = single.to_lowercase();
                Move::ALL
                    .iter()
                    .copied()
                    .find(|mv| mv.label() == wanted)
                    .ok_or_else(|| unparsable(s))
            }
            _ => Err(unparsable(s)),
        }
    }
}

fn unparsable(s: &str) -> GameError {
    GameError::ParseMove(s.to_string())
}
