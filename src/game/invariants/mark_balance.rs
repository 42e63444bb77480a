//! Mark balance invariant: X never leads O by more than one mark.

use super::Invariant;
use super::super::types::{GameState, Player};

/// Invariant: count(X) - count(O) is 0 or 1.
///
/// X moves first and turns strictly alternate, so the board can never
/// hold more X's than O's plus one, nor fewer X's than O's.
pub struct MarkBalance;

impl Invariant<GameState> for MarkBalance {
    fn holds(state: &GameState) -> bool {
        let x = state.board().mark_count(Player::X);
        let o = state.board().mark_count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "Board holds either equal marks or one extra X"
    }
}
