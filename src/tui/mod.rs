//! Terminal UI: event loop and rendering around the headless session.

mod app;
mod effects;
mod input;
mod ui;

use crate::opponent::RandomOpponent;
use crate::session::GameSession;
use anyhow::Result;
use app::App;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::sleep;
use tracing::{error, info};

/// Runtime options for the TUI.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    /// Start with the computer opponent enabled.
    pub vs_computer: bool,
    /// Fixed seed for the opponent's random source.
    pub seed: Option<u64>,
    /// Pacing delay before the computer replies.
    pub opponent_delay: Duration,
    /// Disable the terminal-bell sound cues.
    pub mute: bool,
}

/// Runs the game until the user quits.
pub async fn run(options: Options) -> Result<()> {
    info!(?options, "starting terminal UI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_game(&mut terminal, options).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "game loop error");
    }
    res
}

/// Single-threaded, cooperative game loop: one trigger at a time, each
/// handled to completion before the next is polled.
async fn run_game<B>(terminal: &mut Terminal<B>, options: Options) -> Result<()>
where
    B: ratatui::backend::Backend,
    B::Error: std::error::Error + Send + Sync + 'static,
{
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let opponent = match options.seed {
        Some(seed) => RandomOpponent::from_seed(seed),
        None => RandomOpponent::from_entropy(),
    };
    let session = GameSession::new(Box::new(opponent), event_tx)
        .with_opponent_enabled(options.vs_computer);
    let mut app = App::new(session, event_rx, options.opponent_delay, options.mute);

    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if event::poll(Duration::from_millis(33))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }

        app.tick();

        if app.should_quit() {
            info!("user quit");
            return Ok(());
        }

        // Frame pacing; also keeps the loop cooperative.
        sleep(Duration::from_millis(15)).await;
    }
}
