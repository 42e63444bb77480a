//! Game session: wires the engine, the opponent selector, and the
//! presentation layer together.
//!
//! The session is the single owner of the game state. Input arrives as
//! discrete triggers (a cell activation, a restart, a mode toggle, a
//! delayed opponent move) and runs to completion before the next trigger
//! is processed. Invalid input is ignored input: it is logged and
//! dropped, never surfaced as an error.

use crate::game::{Game, GameStatus, Player, Position};
use crate::opponent::Opponent;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Events emitted to the presentation layer.
///
/// The renderer consumes these instead of reaching into the session, so
/// the core stays headless and testable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A mark was placed.
    MoveMade {
        /// Player who moved.
        player: Player,
        /// Where the mark was placed.
        position: Position,
    },
    /// The status line changed.
    StatusChanged(String),
    /// The game ended. Emitted exactly once per game.
    GameOver {
        /// Winning player, or `None` for a draw.
        winner: Option<Player>,
        /// The completed triple, when won.
        line: Option<[Position; 3]>,
    },
    /// The board was reset to the initial state.
    BoardReset,
    /// Opponent mode was toggled.
    OpponentToggled(bool),
}

/// A running game session.
pub struct GameSession {
    game: Game,
    opponent: Box<dyn Opponent + Send>,
    opponent_enabled: bool,
    /// Mark played by the automated opponent.
    opponent_mark: Player,
    events: mpsc::UnboundedSender<GameEvent>,
}

impl GameSession {
    /// Creates a session with the opponent mode initially disabled.
    pub fn new(
        opponent: Box<dyn Opponent + Send>,
        events: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            game: Game::new(),
            opponent,
            opponent_enabled: false,
            opponent_mark: Player::O,
            events,
        }
    }

    /// Enables or disables the opponent mode up front.
    pub fn with_opponent_enabled(mut self, enabled: bool) -> Self {
        self.opponent_enabled = enabled;
        self
    }

    /// Returns the game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns whether the opponent mode is enabled.
    pub fn opponent_enabled(&self) -> bool {
        self.opponent_enabled
    }

    /// True when the automated opponent should move next.
    pub fn opponent_to_move(&self) -> bool {
        self.opponent_enabled
            && self.game.status() == GameStatus::InProgress
            && self.game.to_move() == self.opponent_mark
    }

    /// The status line in one of its three forms.
    pub fn status_line(&self) -> String {
        match self.game.status() {
            GameStatus::InProgress => format!("Player {}'s turn", self.game.to_move()),
            GameStatus::Won(player) => format!("{player} wins!"),
            GameStatus::Draw => "It's a draw!".to_string(),
        }
    }

    /// Handles a cell activation for the current player.
    ///
    /// A move on a filled square or after the game has ended is a no-op.
    #[instrument(skip(self))]
    pub fn handle_cell(&mut self, pos: Position) {
        let player = self.game.to_move();
        match self.game.make_move(pos) {
            Err(err) => {
                debug!(%err, "ignoring input");
            }
            Ok(status) => {
                self.emit(GameEvent::MoveMade {
                    player,
                    position: pos,
                });
                match status {
                    GameStatus::Won(winner) => {
                        info!(%winner, "game won");
                        self.emit(GameEvent::GameOver {
                            winner: Some(winner),
                            line: self.game.winning_line(),
                        });
                    }
                    GameStatus::Draw => {
                        info!("game drawn");
                        self.emit(GameEvent::GameOver {
                            winner: None,
                            line: None,
                        });
                    }
                    GameStatus::InProgress => {}
                }
                self.emit(GameEvent::StatusChanged(self.status_line()));
            }
        }
    }

    /// Plays the scheduled opponent move.
    ///
    /// Scheduled moves always fire; if the game ended or the mode was
    /// toggled off in the meantime this is a safe no-op.
    #[instrument(skip(self))]
    pub fn opponent_move(&mut self) {
        if !self.opponent_to_move() {
            debug!("stale opponent move, ignoring");
            return;
        }
        // Same validated path as human input.
        if let Some(pos) = self.opponent.select_move(self.game.board()) {
            debug!(opponent = self.opponent.name(), %pos, "opponent moves");
            self.handle_cell(pos);
        }
    }

    /// Resets the game unconditionally, from any state.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("restarting game");
        self.game.restart();
        self.emit(GameEvent::BoardReset);
        self.emit(GameEvent::StatusChanged(self.status_line()));
    }

    /// Flips the opponent mode. Takes effect from the next turn.
    #[instrument(skip(self))]
    pub fn toggle_opponent(&mut self) -> bool {
        self.opponent_enabled = !self.opponent_enabled;
        info!(enabled = self.opponent_enabled, "opponent mode toggled");
        self.emit(GameEvent::OpponentToggled(self.opponent_enabled));
        self.opponent_enabled
    }

    fn emit(&self, event: GameEvent) {
        // A closed channel means the renderer is gone; nothing to do.
        let _ = self.events.send(event);
    }
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("game", &self.game)
            .field("opponent", &self.opponent.name())
            .field("opponent_enabled", &self.opponent_enabled)
            .finish()
    }
}
