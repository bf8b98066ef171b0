//! Row-major grid of puzzle tiles.

use crate::error::GameError;
use crate::tile::Tile;
use serde::{Deserialize, Serialize};

/// An R×C grid where every cell owns exactly one tile.
///
/// Positions are fixed for the life of a session: tiles are never moved
/// between cells, only rotated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Tiles in row-major order; `tiles[r * cols + c]` is cell (r, c).
    tiles: Vec<Tile>,
}

impl Grid {
    /// Builds a grid from row-major tiles. Internal to generation.
    pub(crate) fn from_tiles(rows: usize, cols: usize, tiles: Vec<Tile>) -> Self {
        debug_assert_eq!(tiles.len(), rows * cols);
        Self { rows, cols, tiles }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether (row, col) names a cell of this grid.
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Returns the tile at (row, col).
    ///
    /// # Errors
    ///
    /// Returns `GameError::OutOfBounds` for coordinates outside the grid.
    pub fn tile(&self, row: usize, col: usize) -> Result<&Tile, GameError> {
        if !self.in_bounds(row, col) {
            return Err(GameError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(&self.tiles[row * self.cols + col])
    }

    /// Mutable access to the tile at (row, col).
    ///
    /// # Errors
    ///
    /// Returns `GameError::OutOfBounds` for coordinates outside the grid.
    pub fn tile_mut(&mut self, row: usize, col: usize) -> Result<&mut Tile, GameError> {
        if !self.in_bounds(row, col) {
            return Err(GameError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(&mut self.tiles[row * self.cols + col])
    }

    /// Iterates tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Mutable row-major iteration. Internal to scrambling.
    pub(crate) fn tiles_mut(&mut self) -> impl Iterator<Item = &mut Tile> {
        self.tiles.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_grid() -> Grid {
        let tiles = (0..6)
            .map(|i| Tile::new(i as u32 + 1, 1, 2, 3, 4))
            .collect();
        Grid::from_tiles(2, 3, tiles)
    }

    #[test]
    fn tile_lookup_is_row_major() {
        let grid = sample_grid();
        assert_eq!(grid.tile(0, 0).unwrap().id(), 1);
        assert_eq!(grid.tile(0, 2).unwrap().id(), 3);
        assert_eq!(grid.tile(1, 0).unwrap().id(), 4);
        assert_eq!(grid.tile(1, 2).unwrap().id(), 6);
    }

    #[test]
    fn out_of_bounds_lookup_fails() {
        let grid = sample_grid();
        assert!(matches!(
            grid.tile(2, 0),
            Err(GameError::OutOfBounds { row: 2, col: 0, .. })
        ));
        assert!(matches!(
            grid.tile(0, 3),
            Err(GameError::OutOfBounds { row: 0, col: 3, .. })
        ));
    }
}
