//! Application state and logic.

use super::effects::Effects;
use super::input;
use crate::game::{Board, Position};
use crate::session::{GameEvent, GameSession};
use crossterm::event::KeyCode;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Write;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::debug;

/// Main application state: the session plus everything cosmetic.
pub struct App {
    session: GameSession,
    events: mpsc::UnboundedReceiver<GameEvent>,
    cursor: Position,
    status: String,
    winning_line: Option<[Position; 3]>,
    effects: Effects,
    effects_rng: StdRng,
    /// Cosmetic pacing before the computer replies.
    opponent_delay: Duration,
    /// When set, the opponent move fires at this instant. Never
    /// cancelled; a stale firing is a no-op in the session.
    pending_opponent: Option<Instant>,
    mute: bool,
    quit: bool,
}

impl App {
    /// Creates the application around a session and its event stream.
    pub fn new(
        session: GameSession,
        events: mpsc::UnboundedReceiver<GameEvent>,
        opponent_delay: Duration,
        mute: bool,
    ) -> Self {
        let status = session.status_line();
        Self {
            session,
            events,
            cursor: Position::Center,
            status,
            winning_line: None,
            effects: Effects::new(),
            effects_rng: StdRng::from_entropy(),
            opponent_delay,
            pending_opponent: None,
            mute,
            quit: false,
        }
    }

    /// The board to render.
    pub fn board(&self) -> &Board {
        self.session.game().board()
    }

    /// Current cursor cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Current status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// The winning triple to highlight, if the game is won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.winning_line
    }

    /// Celebration state.
    pub fn effects(&self) -> &Effects {
        &self.effects
    }

    /// Whether the computer opponent is enabled.
    pub fn opponent_enabled(&self) -> bool {
        self.session.opponent_enabled()
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.quit = true;
            }
            KeyCode::Char('r') => {
                self.session.restart();
            }
            KeyCode::Char('a') => {
                self.session.toggle_opponent();
                self.maybe_schedule_opponent();
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.activate(self.cursor);
            }
            KeyCode::Char(c) => {
                if let Some(digit) = c.to_digit(10)
                    && let Some(pos) = Position::from_index(digit.wrapping_sub(1) as usize)
                {
                    self.cursor = pos;
                    self.activate(pos);
                }
            }
            _ => {}
        }
    }

    /// Advances time: fires a due opponent move, drains session events,
    /// and steps the animations.
    pub fn tick(&mut self) {
        if let Some(due) = self.pending_opponent
            && Instant::now() >= due
        {
            self.pending_opponent = None;
            self.session.opponent_move();
        }
        self.process_events();
        self.effects.tick();
    }

    fn activate(&mut self, pos: Position) {
        // While the computer's reply is pending the human has no cell to
        // play; drop the input like any other invalid activation.
        if self.session.opponent_to_move() {
            debug!(%pos, "ignoring input during opponent turn");
            return;
        }
        self.session.handle_cell(pos);
        self.maybe_schedule_opponent();
    }

    fn maybe_schedule_opponent(&mut self) {
        if self.session.opponent_to_move() && self.pending_opponent.is_none() {
            self.pending_opponent = Some(Instant::now() + self.opponent_delay);
        }
    }

    fn process_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            debug!(?event, "handling game event");
            match event {
                GameEvent::StatusChanged(status) => {
                    self.status = status;
                }
                GameEvent::GameOver { winner, line } => {
                    self.winning_line = line;
                    if winner.is_some() {
                        self.effects.celebrate(&mut self.effects_rng);
                    }
                    self.play_cue(winner.is_some());
                }
                GameEvent::BoardReset => {
                    self.winning_line = None;
                    self.effects.clear();
                }
                GameEvent::MoveMade { .. } | GameEvent::OpponentToggled(_) => {}
            }
        }
    }

    /// Best-effort audio cue: the terminal bell, rung twice for a win and
    /// once for a draw. Failures are ignored.
    fn play_cue(&self, won: bool) {
        if self.mute {
            return;
        }
        let mut stdout = std::io::stdout();
        let _ = stdout.write_all(cue_bytes(won));
        let _ = stdout.flush();
    }
}

fn cue_bytes(won: bool) -> &'static [u8] {
    if won { b"\x07\x07" } else { b"\x07" }
}
