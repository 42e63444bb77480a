//! Headless game core: board state, rules, and the turn state machine.

mod action;
mod engine;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use engine::Game;
pub use position::Position;
pub use types::{Board, GameState, GameStatus, Player, Square};
