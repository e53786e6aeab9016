//! RNG module - piece selection
//!
//! Pieces are chosen uniformly at random from the session's piece set using a
//! small seeded LCG, so a given seed always replays the same sequence. A fixed
//! source hands out one kind forever (the square-only classic game).

use crate::error::ConfigError;
use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Multiply-shift: uses the high bits of the state.
        ((u64::from(self.next_u32()) * u64::from(max)) >> 32) as u32
    }
}

/// Where spawned pieces come from.
#[derive(Debug, Clone)]
pub enum PieceSource {
    /// Uniform choice over a non-empty set of kinds.
    Uniform { kinds: Vec<PieceKind>, rng: SimpleRng },
    /// Always the same kind.
    Fixed(PieceKind),
}

impl PieceSource {
    /// Uniform source over `kinds`. A single kind becomes [`PieceSource::Fixed`].
    pub fn uniform(kinds: &[PieceKind], seed: u32) -> Result<Self, ConfigError> {
        match kinds {
            [] => Err(ConfigError::EmptyPieceSet),
            [only] => Ok(PieceSource::Fixed(*only)),
            _ => Ok(PieceSource::Uniform {
                kinds: kinds.to_vec(),
                rng: SimpleRng::new(seed),
            }),
        }
    }

    /// Draw the next piece kind
    pub fn draw(&mut self) -> PieceKind {
        match self {
            PieceSource::Fixed(kind) => *kind,
            PieceSource::Uniform { kinds, rng } => {
                let idx = rng.next_range(kinds.len() as u32) as usize;
                kinds[idx]
            }
        }
    }
}
