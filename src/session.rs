//! Game session orchestration for the rotation puzzle.

use crate::config::GameConfig;
use crate::error::GameError;
use crate::generator;
use crate::grid::Grid;
use crate::rules;
use crate::tile::Tile;
use rand::Rng;
use tracing::{debug, info, instrument, warn};

/// A single-player puzzle session.
///
/// Owns the current grid and exposes the operations the presentation layer
/// calls: start a new game, rotate a tile, query solved status. Solved
/// status is recomputed on every query, never cached. The session holds no
/// reference to any rendering object; the presentation layer holds the
/// session and polls it after each interaction.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    grid: Grid,
}

impl GameSession {
    /// Creates a session with a freshly generated, scrambled puzzle.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidConfiguration` when the configuration
    /// fails validation.
    #[instrument(skip(rng))]
    pub fn new<R: Rng>(config: GameConfig, rng: &mut R) -> Result<Self, GameError> {
        let mut grid = generator::generate(&config, rng)?;
        generator::scramble_rotations(&mut grid, rng);
        info!(
            rows = grid.rows(),
            cols = grid.cols(),
            "created new game session"
        );
        Ok(Self { config, grid })
    }

    /// Replaces the grid with a freshly generated, scrambled puzzle and
    /// returns a view of it.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidConfiguration` when the configuration
    /// fails validation; the existing grid is kept in that case.
    #[instrument(skip(self, rng))]
    pub fn new_game<R: Rng>(
        &mut self,
        config: GameConfig,
        rng: &mut R,
    ) -> Result<&Grid, GameError> {
        let mut grid = generator::generate(&config, rng)?;
        generator::scramble_rotations(&mut grid, rng);
        self.config = config;
        self.grid = grid;
        info!(
            rows = self.grid.rows(),
            cols = self.grid.cols(),
            "started new game"
        );
        Ok(&self.grid)
    }

    /// Rotates the tile at (row, col) one quarter-turn clockwise and
    /// returns the updated tile.
    ///
    /// # Errors
    ///
    /// Returns `GameError::OutOfBounds` for invalid coordinates; the grid
    /// is left unmodified.
    #[instrument(skip(self))]
    pub fn rotate(&mut self, row: usize, col: usize) -> Result<&Tile, GameError> {
        let tile = self.grid.tile_mut(row, col).map_err(|e| {
            warn!(row, col, error = %e, "rotate rejected");
            e
        })?;
        tile.rotate_clockwise();
        debug!(
            row,
            col,
            tile_id = tile.id(),
            rotation = tile.rotation(),
            "rotated tile"
        );
        self.grid.tile(row, col)
    }

    /// Whether every adjacent edge pair currently matches.
    pub fn is_solved(&self) -> bool {
        rules::is_solved(&self.grid)
    }

    /// Returns the tile at (row, col).
    ///
    /// # Errors
    ///
    /// Returns `GameError::OutOfBounds` for invalid coordinates.
    pub fn tile_at(&self, row: usize, col: usize) -> Result<&Tile, GameError> {
        self.grid.tile(row, col)
    }

    /// The current grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The configuration the current grid was generated with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
