//! Who sits in each seat: a human or a computer strategy.

use super::search::StrategyKind;
use super::Player;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Controller of one seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Seat {
    /// Moves come from the adapter's user.
    Human,
    /// Moves come from move search.
    Computer(StrategyKind),
}

impl Seat {
    /// True for computer-controlled seats.
    pub fn is_computer(self) -> bool {
        matches!(self, Seat::Computer(_))
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::Human => write!(f, "human"),
            Seat::Computer(kind) => write!(f, "{}", kind),
        }
    }
}

impl FromStr for Seat {
    type Err = SeatParseError;

    /// `human`, a strategy name, or `computer`/`machine` for the
    /// exhaustive strategy.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "human" => Ok(Seat::Human),
            "computer" | "machine" => Ok(Seat::Computer(StrategyKind::Exhaustive)),
            other => other
                .parse::<StrategyKind>()
                .map(Seat::Computer)
                .map_err(|_| SeatParseError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Seat {
    type Error = SeatParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Seat> for String {
    fn from(seat: Seat) -> Self {
        seat.to_string()
    }
}

/// Text that names no seat controller.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Unknown seat {:?}: expected human, heuristic or exhaustive", _0)]
pub struct SeatParseError(#[error(not(source))] pub String);

/// Seat assignment for both players.
///
/// Missing seats deserialize to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SeatConfig {
    /// Player one (X), who moves first.
    pub one: Seat,
    /// Player two (O).
    pub two: Seat,
}

impl SeatConfig {
    /// Creates a seat assignment.
    pub fn new(one: Seat, two: Seat) -> Self {
        Self { one, two }
    }

    /// The four classic pairings, numbered 1 to 4: human/human,
    /// human/computer, computer/human, computer/computer. Computers play
    /// the exhaustive strategy.
    #[instrument]
    pub fn preset(number: u8) -> Option<Self> {
        let computer = Seat::Computer(StrategyKind::Exhaustive);
        match number {
            1 => Some(Self::new(Seat::Human, Seat::Human)),
            2 => Some(Self::new(Seat::Human, computer)),
            3 => Some(Self::new(computer, Seat::Human)),
            4 => Some(Self::new(computer, computer)),
            _ => None,
        }
    }

    /// The seat controlling `player`.
    pub fn seat(&self, player: Player) -> Seat {
        match player {
            Player::One => self.one,
            Player::Two => self.two,
        }
    }

    /// True when no human takes part.
    pub fn all_computer(&self) -> bool {
        self.one.is_computer() && self.two.is_computer()
    }
}

impl Default for SeatConfig {
    fn default() -> Self {
        Self::new(Seat::Human, Seat::Computer(StrategyKind::Exhaustive))
    }
}
