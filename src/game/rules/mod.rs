//! Game rules.
//!
//! Pure functions for evaluating board state. Rules are separated from
//! board storage so the evaluator can be tested headless, without the
//! engine or any display surface.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WINNING_LINES, check_winner, winning_line};
