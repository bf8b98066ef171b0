//! Game configuration.

use crate::error::GameError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Parameters for a new puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Grid row count.
    rows: usize,
    /// Grid column count.
    cols: usize,
    /// Number of distinct edge labels, values drawn from `1..=labels`.
    labels: u8,
    /// Optional RNG seed for reproducible puzzles.
    seed: Option<u64>,
}

impl GameConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidConfiguration` when rows, cols, or labels
    /// is zero.
    #[instrument]
    pub fn new(rows: usize, cols: usize, labels: u8, seed: Option<u64>) -> Result<Self, GameError> {
        let config = Self {
            rows,
            cols,
            labels,
            seed,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the positivity bounds on every field.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidConfiguration` when rows, cols, or labels
    /// is zero.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.rows == 0 || self.cols == 0 || self.labels == 0 {
            return Err(GameError::InvalidConfiguration {
                rows: self.rows,
                cols: self.cols,
                labels: self.labels,
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    /// The reference instance: 3×3 grid, nine labels, entropy-seeded.
    fn default() -> Self {
        Self {
            rows: 3,
            cols: 3,
            labels: 9,
            seed: None,
        }
    }
}
