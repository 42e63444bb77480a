//! Command-line interface.

use clap::Parser;

/// Festive Tic-Tac-Toe - terminal tic-tac-toe with celebratory effects
#[derive(Parser, Debug)]
#[command(name = "festive_tictactoe")]
#[command(about = "Tic-tac-toe in the terminal, with an optional computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Start with the computer opponent enabled (toggle in-game with 'a')
    #[arg(long)]
    pub vs_computer: bool,

    /// Seed for the opponent's random source; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Delay before the computer replies, in milliseconds
    #[arg(long, default_value_t = 500)]
    pub delay_ms: u64,

    /// Disable the terminal-bell sound cues
    #[arg(long)]
    pub mute: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["festive_tictactoe"]);
        assert!(!cli.vs_computer);
        assert_eq!(cli.seed, None);
        assert_eq!(cli.delay_ms, 500);
        assert!(!cli.mute);
    }

    #[test]
    fn test_flags_parse() {
        let cli = Cli::parse_from([
            "festive_tictactoe",
            "--vs-computer",
            "--seed",
            "42",
            "--delay-ms",
            "100",
        ]);
        assert!(cli.vs_computer);
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.delay_ms, 100);
    }
}
