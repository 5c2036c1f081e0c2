//! Core domain types for tic-tac-toe.

use super::action::Move;
use super::error::GameError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player one, marks X and always moves first.
    #[strum(serialize = "one", serialize = "x", serialize = "1")]
    One,
    /// Player two, marks O.
    #[strum(serialize = "two", serialize = "o", serialize = "2")]
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The mark this player draws on the board.
    pub fn symbol(self) -> char {
        match self {
            Player::One => 'X',
            Player::Two => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell marked by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Character used by the board's text form.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(player) => player.symbol(),
        }
    }
}

/// 3x3 tic-tac-toe board, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given move's coordinates.
    pub fn get(&self, mv: Move) -> Cell {
        self.cells[mv.row()][mv.col()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, mv: Move) -> bool {
        self.get(mv) == Cell::Empty
    }

    /// Overwrites a cell. Callers outside the crate go through the session.
    pub(crate) fn set(&mut self, mv: Move, cell: Cell) {
        self.cells[mv.row()][mv.col()] = cell;
    }

    /// Returns a copy of this board with `player`'s mark at `mv`.
    ///
    /// The cell is overwritten unconditionally; search code only calls
    /// this with moves taken from [`crate::legal_moves`].
    pub fn with_mark(&self, mv: Move, player: Player) -> Board {
        let mut next = *self;
        next.set(mv, Cell::Occupied(player));
        next
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    /// Iterates every cell with its coordinates in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Move, Cell)> + '_ {
        Move::ALL.iter().map(move |&mv| (mv, self.get(mv)))
    }

    /// Number of cells marked by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells()
            .filter(|(_, cell)| cell.player() == Some(player))
            .count()
    }

    /// Number of non-empty cells.
    pub fn filled(&self) -> usize {
        self.cells().filter(|(_, cell)| *cell != Cell::Empty).count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            let line: Vec<String> = row.iter().map(|c| c.symbol().to_string()).collect();
            write!(f, "{}", line.join("|"))?;
            if r < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = GameError;

    /// Parses the nine cells in row-major order.
    ///
    /// `X`/`O` mark players, `.` or `_` an empty cell. Whitespace, `|` and
    /// `/` are ignored, as are `-+-+-` separator lines, so the output of
    /// `Display` parses back.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for line in s.lines() {
            let trimmed = line.trim();
            if !trimmed.is_empty() && trimmed.chars().all(|c| c == '-' || c == '+') {
                continue;
            }
            for c in trimmed.chars() {
                let cell = match c {
                    'X' | 'x' => Cell::Occupied(Player::One),
                    'O' | 'o' => Cell::Occupied(Player::Two),
                    '.' | '_' => Cell::Empty,
                    '|' | '/' => continue,
                    c if c.is_whitespace() => continue,
                    other => {
                        return Err(GameError::ParseBoard(format!(
                            "unexpected character {:?}",
                            other
                        )));
                    }
                };
                cells.push(cell);
            }
        }

        if cells.len() != 9 {
            return Err(GameError::ParseBoard(format!(
                "expected 9 cells, found {}",
                cells.len()
            )));
        }

        let mut board = Board::new();
        for (mv, cell) in Move::ALL.iter().zip(cells) {
            board.set(*mv, cell);
        }
        Ok(board)
    }
}

/// Classification of a board after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Further moves are accepted.
    InProgress,
    /// The player completed a line.
    Win(Player),
    /// The board filled with no line completed.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(*player),
            _ => None,
        }
    }

    /// True once the game accepts no more moves.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(player) => write!(f, "{} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
