//! Plain-text terminal adapter.
//!
//! Reads moves line by line and writes the board as a keypad grid, so
//! any `BufRead`/`Write` pair works: a real terminal or a test buffer.

use anyhow::Result;
use std::io::{BufRead, Write};
use tictactoe_engine::{Board, Cell, GameError, Move, Outcome, Player, Presenter};
use tracing::{debug, instrument};

/// Renders the board with keypad numbers in the empty cells.
pub fn render_board(board: &Board) -> String {
    let rows: Vec<String> = board
        .rows()
        .iter()
        .enumerate()
        .map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(|(c, cell)| match cell {
                    Cell::Empty => (r * 3 + c + 1).to_string(),
                    Cell::Occupied(player) => player.to_string(),
                })
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .collect();
    format!(" {}\n", rows.join("\n---+---+---\n "))
}

/// Terminal presenter over an input and an output stream.
pub struct TerminalPresenter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPresenter<R, W> {
    /// Creates a presenter reading from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the presenter, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Presenter for TerminalPresenter<R, W> {
    type Error = anyhow::Error;

    fn render(&mut self, board: &Board) -> Result<()> {
        writeln!(self.output, "\n{}", render_board(board))?;
        Ok(())
    }

    fn announce_turn(&mut self, player: Player) -> Result<()> {
        writeln!(self.output, "{} to move", player)?;
        Ok(())
    }

    #[instrument(skip(self, _board))]
    fn request_move(&mut self, _board: &Board, player: Player) -> Result<Option<Move>> {
        loop {
            write!(self.output, "{} > ", player)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                debug!("Input closed");
                return Ok(None);
            }

            let text = line.trim();
            if text.is_empty() {
                continue;
            }
            if text.eq_ignore_ascii_case("q") || text.eq_ignore_ascii_case("quit") {
                return Ok(None);
            }

            match text.parse::<Move>() {
                Ok(mv) => return Ok(Some(mv)),
                Err(e) => {
                    debug!(error = %e, "Unreadable move");
                    writeln!(
                        self.output,
                        "{}. Enter 1-9, `row col`, a cell name, or q to quit.",
                        e
                    )?;
                }
            }
        }
    }

    fn reject_move(&mut self, error: &GameError) -> Result<()> {
        writeln!(self.output, "{}. Try again.", error)?;
        Ok(())
    }

    fn show_outcome(&mut self, outcome: Outcome) -> Result<()> {
        match outcome {
            Outcome::Win(player) => writeln!(self.output, "{} wins!", player)?,
            Outcome::Draw => writeln!(self.output, "Draw.")?,
            Outcome::InProgress => writeln!(self.output, "Game abandoned.")?,
        }
        self.output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_board_shows_keypad() {
        let text = render_board(&Board::new());
        assert_eq!(text, " 1 | 2 | 3\n---+---+---\n 4 | 5 | 6\n---+---+---\n 7 | 8 | 9\n");
    }

    #[test]
    fn test_render_marks() {
        let board: Board = "X../.O./...".parse().unwrap();
        let text = render_board(&board);
        assert!(text.starts_with(" X | 2 | 3\n"));
        assert!(text.contains(" 4 | O | 6\n"));
    }
}
