//! History consistency invariant: the board is exactly the replayed history.

use super::Invariant;
use super::super::types::{Board, GameState, Square};

/// Invariant: replaying the history reproduces the board.
///
/// Exactly the played positions are occupied, by the player who played
/// them, and no position appears in the history twice.
pub struct HistoryConsistent;

impl Invariant<GameState> for HistoryConsistent {
    fn holds(state: &GameState) -> bool {
        let mut replayed = Board::new();
        for mv in state.history() {
            if !replayed.is_empty(mv.position()) {
                return false;
            }
            replayed.set(mv.position(), Square::Occupied(mv.player()));
        }
        &replayed == state.board()
    }

    fn description() -> &'static str {
        "Board matches the replayed move history"
    }
}
