//! Terminal tic-tac-toe built on `tictactoe_engine`.
//!
//! - **cli**: argument parsing
//! - **config**: TOML seats, pacing and seed
//! - **suggest**: one-shot move advice for a board
//! - **terminal**: line-based presenter for the engine's controller

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod suggest;
pub mod terminal;

pub use cli::{Cli, Command, PlayArgs};
pub use config::{AppConfig, ConfigError, Overrides};
pub use suggest::{ScoredMove, Suggestion, infer_player, suggest};
pub use terminal::{TerminalPresenter, render_board};
