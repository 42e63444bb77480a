//! Game engine: move validation and the turn state machine.

use super::action::{Move, MoveError};
use super::position::Position;
use super::rules;
use super::types::{Board, GameState, GameStatus, Player};
use tracing::instrument;

/// Tic-tac-toe engine.
///
/// Owns the [`GameState`] and drives the status machine:
/// `InProgress -> Won | Draw`, with `Won` and `Draw` terminal. All moves,
/// human or automated, go through [`Game::make_move`]; there is no
/// unvalidated path.
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.state.current_player()
    }

    /// Places the current player's mark at the given position.
    ///
    /// On success the status is re-evaluated: win first, then draw, and
    /// only if the game continues does the turn pass to the other player.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] once the game has ended and
    /// [`MoveError::SquareOccupied`] for a filled square. The state is
    /// unchanged in both cases.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn make_move(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        if self.state.status().is_terminal() {
            return Err(MoveError::GameOver);
        }
        if !self.state.board().is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.state.current_player();
        self.state.record(Move::new(player, pos));

        // Win takes priority over draw on the final move.
        if let Some(winner) = rules::check_winner(self.state.board()) {
            self.state.set_status(GameStatus::Won(winner));
        } else if rules::is_full(self.state.board()) {
            self.state.set_status(GameStatus::Draw);
        } else {
            self.state.switch_player();
        }

        Ok(self.state.status())
    }

    /// Resets to the initial state, from any state.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.state = GameState::new();
    }

    /// Positions of the winning triple, once the game is won.
    ///
    /// Uses the same fixed scan order as the win evaluator, so the
    /// reported triple is deterministic when several lines complete at
    /// once.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        match self.state.status() {
            GameStatus::Won(_) => rules::winning_line(self.state.board()).map(|(_, line)| line),
            _ => None,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
