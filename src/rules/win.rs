//! Win detection: every adjacent edge pair must match.

use crate::grid::Grid;
use tracing::instrument;

/// Checks whether the grid is solved.
///
/// Scans cells in row-major order; each cell with a row predecessor must
/// match it top-to-bottom, each cell with a column predecessor must match it
/// left-to-right. Short-circuits on the first mismatch. Pure query, no side
/// effects.
#[instrument(skip(grid))]
pub fn is_solved(grid: &Grid) -> bool {
    for r in 0..grid.rows() {
        for c in 0..grid.cols() {
            // in-bounds by loop construction
            let Ok(tile) = grid.tile(r, c) else {
                return false;
            };
            if r > 0 {
                let Ok(north) = grid.tile(r - 1, c) else {
                    return false;
                };
                if tile.top() != north.bottom() {
                    return false;
                }
            }
            if c > 0 {
                let Ok(west) = grid.tile(r, c - 1) else {
                    return false;
                };
                if tile.left() != west.right() {
                    return false;
                }
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::generator;
    use crate::tile::Tile;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// 2×2 solved grid with all-distinct edge values, so any single
    /// rotation is guaranteed to break an adjacency.
    fn solved_2x2() -> Grid {
        let tiles = vec![
            Tile::new(1, 1, 2, 3, 4),
            Tile::new(2, 5, 6, 7, 2),
            Tile::new(3, 3, 8, 9, 1),
            Tile::new(4, 7, 4, 5, 8),
        ];
        Grid::from_tiles(2, 2, tiles)
    }

    #[test]
    fn fresh_generated_grid_is_solved() {
        let config = GameConfig::new(3, 3, 9, None).unwrap();
        let grid = generator::generate(&config, &mut StdRng::seed_from_u64(21)).unwrap();
        assert!(is_solved(&grid));
    }

    #[test]
    fn hand_built_solved_grid_is_solved() {
        assert!(is_solved(&solved_2x2()));
    }

    #[test]
    fn single_cell_grid_is_always_solved() {
        let mut grid = Grid::from_tiles(1, 1, vec![Tile::new(1, 1, 2, 3, 4)]);
        assert!(is_solved(&grid));
        grid.tile_mut(0, 0).unwrap().rotate_clockwise();
        // no neighbors, so any orientation is a solution
        assert!(is_solved(&grid));
    }

    #[test]
    fn rotating_one_tile_breaks_a_solved_grid() {
        let mut grid = solved_2x2();
        grid.tile_mut(0, 0).unwrap().rotate_clockwise();
        assert!(!is_solved(&grid));
    }

    #[test]
    fn horizontal_mismatch_is_detected() {
        let mut grid = solved_2x2();
        grid.tile_mut(0, 1).unwrap().rotate_clockwise();
        assert!(!is_solved(&grid));
    }

    #[test]
    fn undoing_the_rotation_restores_the_win() {
        let mut grid = solved_2x2();
        let tile = grid.tile_mut(1, 1).unwrap();
        tile.rotate_clockwise();
        assert!(!is_solved(&grid));
        for _ in 0..3 {
            grid.tile_mut(1, 1).unwrap().rotate_clockwise();
        }
        assert!(is_solved(&grid));
    }
}
