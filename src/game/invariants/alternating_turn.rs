//! Alternating turn invariant: X, O, X, O, ...

use super::Invariant;
use super::super::types::{GameState, Player};

/// Invariant: players strictly alternate, X first.
///
/// The move history must show X, O, X, O, ... and the player to move
/// must follow from the history length while the game is in progress.
pub struct AlternatingTurn;

impl Invariant<GameState> for AlternatingTurn {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        if let Some(first) = history.first()
            && first.player() != Player::X
        {
            return false;
        }

        for window in history.windows(2) {
            if window[0].player() == window[1].player() {
                return false;
            }
        }

        // In terminal states the turn is frozen on the final mover, so
        // only check the derived player mid-game.
        if state.status().is_terminal() {
            return true;
        }

        let expected = if history.len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };
        state.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
