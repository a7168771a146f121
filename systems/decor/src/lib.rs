#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Decorative ground-layer generator.
//!
//! The ground layer sits beneath the level layer and carries no gameplay
//! meaning; every cell receives one draw from a weighted categorical
//! distribution over a small palette of floor tiles. The distribution is
//! expressed as repetition counts, so plain grass dominates while the rarer
//! variants break up the texture.

use maze_escape_core::TileIndex;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Bundled palette: tile index paired with its relative frequency.
const DEFAULT_PALETTE: [(i32, u32); 4] = [(1, 10), (2, 8), (3, 1), (44, 1)];

/// Configuration parameters required to construct the ground generator.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    seed: u64,
}

impl Config {
    /// Creates a new configuration using the provided RNG seed.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

/// Deterministic generator for the decorative ground layer.
#[derive(Debug)]
pub struct GroundGenerator {
    rng: ChaCha8Rng,
    palette: Vec<TileIndex>,
}

impl GroundGenerator {
    /// Creates a generator over the bundled floor-tile palette.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let entries: Vec<(TileIndex, u32)> = DEFAULT_PALETTE
            .iter()
            .map(|(index, weight)| (TileIndex::new(*index), *weight))
            .collect();
        Self::with_palette(config, &entries)
    }

    /// Creates a generator over an explicit weighted palette.
    ///
    /// Entries with a zero weight are skipped. An entirely empty palette
    /// degenerates to emitting [`TileIndex::FLOOR`] for every cell.
    #[must_use]
    pub fn with_palette(config: Config, entries: &[(TileIndex, u32)]) -> Self {
        let mut palette = Vec::new();
        for (tile, weight) in entries {
            for _ in 0..*weight {
                palette.push(*tile);
            }
        }
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            palette,
        }
    }

    /// Produces one weighted tile draw per cell, row-major.
    #[must_use]
    pub fn generate(&mut self, columns: u32, rows: u32) -> Vec<TileIndex> {
        let capacity = columns as usize * rows as usize;
        if self.palette.is_empty() {
            return vec![TileIndex::FLOOR; capacity];
        }

        let mut tiles = Vec::with_capacity(capacity);
        for _ in 0..capacity {
            let pick = self.rng.gen_range(0..self.palette.len());
            tiles.push(self.palette[pick]);
        }
        tiles
    }
}
