//! Turn orchestration between seats and a presenter.

use super::presenter::Presenter;
use super::search::{Strategy, choose_move};
use super::seats::{Seat, SeatConfig};
use super::{GameError, GameSession, Move, Outcome, Player};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Runs one game session for a seat configuration.
pub struct Controller {
    session: GameSession,
    seats: SeatConfig,
    strategies: [Option<Box<dyn Strategy>>; 2],
    pacing: Duration,
}

impl Controller {
    /// Starts a session with the given seats.
    ///
    /// `seed` fixes the heuristic's random fallback; player two's
    /// strategy uses the next seed so twin heuristics do not mirror.
    #[instrument]
    pub fn start(seats: SeatConfig, seed: Option<u64>) -> Self {
        info!(one = %seats.one, two = %seats.two, "Starting session");
        let build = |seat: Seat, offset: u64| match seat {
            Seat::Human => None,
            Seat::Computer(kind) => Some(kind.build(seed.map(|s| s.wrapping_add(offset)))),
        };
        Self {
            session: GameSession::new(),
            seats,
            strategies: [build(seats.one, 0), build(seats.two, 1)],
            pacing: Duration::ZERO,
        }
    }

    /// Delay before each computer move when both seats are computers.
    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    /// The session being played.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// The seat assignment.
    pub fn seats(&self) -> &SeatConfig {
        &self.seats
    }

    /// The seat whose turn it is.
    pub fn seat_to_move(&self) -> Seat {
        self.seats.seat(self.session.to_move())
    }

    /// Applies a human move.
    ///
    /// # Errors
    ///
    /// Anything [`GameSession::apply`] rejects.
    pub fn play_human(&mut self, mv: Move) -> Result<Outcome, GameError> {
        self.session.apply(mv)
    }

    /// Lets the computer in the current seat move.
    ///
    /// Returns `None` if the seat is human-controlled.
    ///
    /// # Errors
    ///
    /// [`GameError::NoLegalMoves`] or [`GameError::GameOver`] if the game
    /// is already decided.
    #[instrument(skip(self), fields(player = %self.session.to_move()))]
    pub fn play_computer(&mut self) -> Result<Option<(Move, Outcome)>, GameError> {
        if self.session.is_over() {
            return Err(GameError::GameOver(self.session.outcome()));
        }
        let player = self.session.to_move();
        let Some(strategy) = self.strategies[slot(player)].as_deref_mut() else {
            return Ok(None);
        };

        if self.seats.all_computer() && !self.pacing.is_zero() {
            debug!(pacing_ms = self.pacing.as_millis() as u64, "Pacing computer move");
            std::thread::sleep(self.pacing);
        }

        let mv = choose_move(self.session.board(), player, strategy)?;
        let outcome = self.session.apply(mv)?;
        Ok(Some((mv, outcome)))
    }

    /// Plays the session to completion through `presenter`.
    ///
    /// Rejected human moves are reported and asked again. Returns `None`
    /// if the user quit before the end.
    ///
    /// # Errors
    ///
    /// Presenter failures, and any error from a computer seat, which
    /// indicates a bug rather than bad input.
    #[instrument(skip_all)]
    pub fn run<P: Presenter>(&mut self, presenter: &mut P) -> Result<Option<Outcome>, P::Error> {
        presenter.render(self.session.board())?;

        while !self.session.is_over() {
            let player = self.session.to_move();
            presenter.announce_turn(player)?;

            match self.seat_to_move() {
                Seat::Human => {
                    let Some(mv) = presenter.request_move(self.session.board(), player)? else {
                        info!(%player, "Player quit");
                        return Ok(None);
                    };
                    if let Err(e) = self.play_human(mv) {
                        warn!(error = %e, "Human move rejected");
                        presenter.reject_move(&e)?;
                        continue;
                    }
                }
                Seat::Computer(_) => {
                    self.play_computer()?;
                }
            }

            presenter.render(self.session.board())?;
        }

        let outcome = self.session.outcome();
        info!(%outcome, "Session finished");
        presenter.show_outcome(outcome)?;
        Ok(Some(outcome))
    }
}

impl std::fmt::Debug for Controller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("session", &self.session)
            .field("seats", &self.seats)
            .field("pacing", &self.pacing)
            .finish_non_exhaustive()
    }
}

fn slot(player: Player) -> usize {
    match player {
        Player::One => 0,
        Player::Two => 1,
    }
}
