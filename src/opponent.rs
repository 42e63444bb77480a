//! Automated opponent: uniform random selection over empty squares.

use crate::game::{Board, Position};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::debug;

/// A move selector for the automated second player.
///
/// Selectors only pick a position; the chosen move runs through the same
/// validated path as human input, with no bypass.
pub trait Opponent {
    /// Picks a position among the empty squares.
    ///
    /// Returns `None` on a full board. The session only consults the
    /// selector while the game is in progress, so at least one empty
    /// square exists whenever this is called in play.
    fn select_move(&mut self, board: &Board) -> Option<Position>;

    /// Display name for this opponent.
    fn name(&self) -> &str;
}

/// Opponent that picks uniformly at random among the empty squares.
///
/// The random source is injected so tests can seed it and assert
/// deterministic outcomes.
#[derive(Debug)]
pub struct RandomOpponent<R> {
    rng: R,
}

impl RandomOpponent<StdRng> {
    /// Creates an opponent seeded from the OS entropy source.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates an opponent with a fixed seed, for reproducible games.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: rand::Rng> RandomOpponent<R> {
    /// Creates an opponent around an existing random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: rand::Rng> Opponent for RandomOpponent<R> {
    fn select_move(&mut self, board: &Board) -> Option<Position> {
        let candidates = Position::valid_moves(board);
        let choice = candidates.choose(&mut self.rng).copied();
        debug!(?choice, candidates = candidates.len(), "opponent selected");
        choice
    }

    fn name(&self) -> &str {
        "Computer"
    }
}
