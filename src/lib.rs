//! Festive Tic-Tac-Toe - terminal tic-tac-toe with celebratory effects
//!
//! The game logic lives in a headless core so it can be driven and tested
//! without any display surface:
//!
//! - **Game core**: board state, win/draw rules, and the turn state
//!   machine ([`game`])
//! - **Opponent**: uniform random move selection with an injectable,
//!   seedable random source ([`RandomOpponent`])
//! - **Session**: single owner of the game state; validates input and
//!   emits [`GameEvent`]s for the renderer ([`GameSession`])
//! - **TUI**: ratatui adapter consuming state snapshots and events
//!   ([`tui`])
//!
//! # Example
//!
//! ```
//! use festive_tictactoe::{GameSession, GameStatus, Position, RandomOpponent};
//! use tokio::sync::mpsc;
//!
//! let (events, _rx) = mpsc::unbounded_channel();
//! let mut session = GameSession::new(Box::new(RandomOpponent::from_seed(1)), events);
//!
//! session.handle_cell(Position::Center);
//! assert_eq!(session.game().status(), GameStatus::InProgress);
//! assert_eq!(session.status_line(), "Player O's turn");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod game;
mod opponent;
mod session;
pub mod tui;

pub use game::{Board, Game, GameState, GameStatus, Move, MoveError, Player, Position, Square};
pub use opponent::{Opponent, RandomOpponent};
pub use session::{GameEvent, GameSession};
