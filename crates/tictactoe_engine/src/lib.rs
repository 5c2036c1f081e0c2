//! Pure tic-tac-toe core: rules, move search and session state.
//!
//! # Architecture
//!
//! - **Board & rules**: a 3x3 grid and pure functions over it
//! - **Search**: a one-ply heuristic and a full-depth negamax
//! - **Session**: the single owner of a board in play
//! - **Controller**: drives a session through a [`Presenter`] adapter
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameSession, Outcome, Player};
//!
//! let mut session = GameSession::new();
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     session.apply_at(row, col)?;
//! }
//! assert_eq!(session.outcome(), Outcome::Win(Player::One));
//! # Ok::<(), tictactoe_engine::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod controller;
mod error;
pub mod invariants;
mod presenter;
pub mod rules;
pub mod search;
mod seats;
mod session;
mod types;

pub use action::Move;
pub use controller::Controller;
pub use error::{ErrorKind, GameError};
pub use presenter::Presenter;
pub use rules::{is_full, is_terminal, legal_moves, winner, winner_along};
pub use search::{Exhaustive, Heuristic, Strategy, StrategyKind, choose_move, negamax};
pub use seats::{Seat, SeatConfig, SeatParseError};
pub use session::{GameSession, Turn};
pub use types::{Board, Cell, Outcome, Player};
