//! Festive Tic-Tac-Toe binary.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use festive_tictactoe::cli::Cli;
use festive_tictactoe::tui;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to a file so output does not interfere with the TUI.
    let log_file = std::fs::File::create("festive_tictactoe.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!("starting Festive Tic-Tac-Toe");

    tui::run(tui::Options {
        vs_computer: cli.vs_computer,
        seed: cli.seed,
        opponent_delay: Duration::from_millis(cli.delay_ms),
        mute: cli.mute,
    })
    .await
}
