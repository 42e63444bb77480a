//! Celebratory effects: confetti particles and the blast flash.
//!
//! Purely cosmetic state advanced once per UI tick. The board, status,
//! and game logic never depend on anything here.

use rand::Rng;
use rand::seq::SliceRandom;
use ratatui::style::Color;

const CONFETTI_COUNT: usize = 100;
const BLAST_TICKS: u8 = 8;

const PALETTE: [Color; 7] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Magenta,
    Color::LightBlue,
    Color::LightRed,
];

const GLYPHS: [char; 4] = ['*', 'o', '+', '.'];

/// A single confetti particle, positioned as a percentage of the board
/// area so it survives terminal resizes.
#[derive(Debug, Clone, Copy)]
pub struct ConfettiPiece {
    /// Horizontal position, 0-99.
    pub col_pct: u16,
    /// Vertical position, 0-99.
    pub row_pct: u16,
    /// Particle color.
    pub color: Color,
    /// Particle glyph.
    pub glyph: char,
    /// Remaining ticks before the piece disappears.
    pub ttl: u8,
}

/// Active celebration state.
#[derive(Debug, Default)]
pub struct Effects {
    pieces: Vec<ConfettiPiece>,
    blast_ticks: u8,
}

impl Effects {
    /// Creates idle effects.
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns the win celebration: a confetti burst plus a blast flash.
    pub fn celebrate<R: Rng>(&mut self, rng: &mut R) {
        self.pieces = (0..CONFETTI_COUNT)
            .map(|_| ConfettiPiece {
                col_pct: rng.gen_range(0..100),
                row_pct: rng.gen_range(0..100),
                color: *PALETTE.choose(rng).unwrap_or(&Color::Yellow),
                glyph: *GLYPHS.choose(rng).unwrap_or(&'*'),
                ttl: rng.gen_range(20..60),
            })
            .collect();
        self.blast_ticks = BLAST_TICKS;
    }

    /// Advances the animation by one tick.
    pub fn tick(&mut self) {
        for piece in &mut self.pieces {
            piece.ttl = piece.ttl.saturating_sub(1);
            // Drift downward as the piece falls.
            if piece.ttl % 2 == 0 {
                piece.row_pct = (piece.row_pct + 3).min(99);
            }
        }
        self.pieces.retain(|piece| piece.ttl > 0);
        self.blast_ticks = self.blast_ticks.saturating_sub(1);
    }

    /// Removes all active effects.
    pub fn clear(&mut self) {
        self.pieces.clear();
        self.blast_ticks = 0;
    }

    /// Live confetti pieces.
    pub fn pieces(&self) -> &[ConfettiPiece] {
        &self.pieces
    }

    /// True while the blast flash is showing.
    pub fn blast_active(&self) -> bool {
        self.blast_ticks > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_celebrate_spawns_confetti_and_blast() {
        let mut effects = Effects::new();
        let mut rng = StdRng::seed_from_u64(1);
        effects.celebrate(&mut rng);
        assert_eq!(effects.pieces().len(), CONFETTI_COUNT);
        assert!(effects.blast_active());
    }

    #[test]
    fn test_effects_expire() {
        let mut effects = Effects::new();
        let mut rng = StdRng::seed_from_u64(1);
        effects.celebrate(&mut rng);
        for _ in 0..60 {
            effects.tick();
        }
        assert!(effects.pieces().is_empty());
        assert!(!effects.blast_active());
    }

    #[test]
    fn test_clear_removes_everything() {
        let mut effects = Effects::new();
        let mut rng = StdRng::seed_from_u64(1);
        effects.celebrate(&mut rng);
        effects.clear();
        assert!(effects.pieces().is_empty());
        assert!(!effects.blast_active());
    }
}
