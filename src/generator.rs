//! Solvable-by-construction puzzle generation.

use crate::config::GameConfig;
use crate::error::GameError;
use crate::grid::Grid;
use crate::tile::Tile;
use rand::Rng;
use tracing::{debug, instrument};

/// Generates a solved grid for the given configuration.
///
/// Cells are produced in a single row-major sweep. Each cell's top edge is
/// copied from the bottom of the tile above it (fresh on the first row) and
/// its left edge from the right of the tile to its west (fresh on the first
/// column); right and bottom edges are always fresh draws, constrained later
/// when their neighbors are generated. That one sweep is what makes every
/// interior adjacency match, and therefore what makes the puzzle solvable by
/// rotation alone. Tile ids count up from 1 in sweep order.
///
/// # Errors
///
/// Returns `GameError::InvalidConfiguration` when the configuration fails
/// validation.
#[instrument(skip(rng))]
pub fn generate<R: Rng>(config: &GameConfig, rng: &mut R) -> Result<Grid, GameError> {
    config.validate()?;

    let rows = *config.rows();
    let cols = *config.cols();
    let labels = *config.labels();
    let mut tiles: Vec<Tile> = Vec::with_capacity(rows * cols);
    let mut next_id: u32 = 1;

    for r in 0..rows {
        for c in 0..cols {
            let top = if r == 0 {
                rng.gen_range(1..=labels)
            } else {
                tiles[(r - 1) * cols + c].bottom()
            };
            let left = if c == 0 {
                rng.gen_range(1..=labels)
            } else {
                tiles[r * cols + c - 1].right()
            };
            let right = rng.gen_range(1..=labels);
            let bottom = rng.gen_range(1..=labels);

            tiles.push(Tile::new(next_id, top, right, bottom, left));
            next_id += 1;
        }
    }

    debug!(rows, cols, labels, "generated solved grid");
    Ok(Grid::from_tiles(rows, cols, tiles))
}

/// Randomizes every tile's rotation in place.
///
/// Each tile is reset to the canonical orientation first, then given a
/// uniform number of clockwise quarter-turns in 0..4, independently of all
/// other tiles. A tile landing back on its solved orientation is accepted
/// behavior.
#[instrument(skip(grid, rng))]
pub fn scramble_rotations<R: Rng>(grid: &mut Grid, rng: &mut R) {
    for tile in grid.tiles_mut() {
        tile.reset_rotation();
        let turns = rng.gen_range(0..4);
        for _ in 0..turns {
            tile.rotate_clockwise();
        }
    }
    debug!("scrambled tile rotations");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn config(rows: usize, cols: usize, labels: u8) -> GameConfig {
        GameConfig::new(rows, cols, labels, None).unwrap()
    }

    #[test]
    fn generated_grid_satisfies_adjacency_invariants() {
        let mut rng = StdRng::seed_from_u64(42);
        for (rows, cols, labels) in [(1, 1, 1), (1, 5, 3), (4, 1, 2), (3, 3, 9), (5, 7, 4)] {
            let grid = generate(&config(rows, cols, labels), &mut rng).unwrap();
            for r in 0..rows {
                for c in 0..cols {
                    let tile = grid.tile(r, c).unwrap();
                    if r > 0 {
                        assert_eq!(tile.top(), grid.tile(r - 1, c).unwrap().bottom());
                    }
                    if c > 0 {
                        assert_eq!(tile.left(), grid.tile(r, c - 1).unwrap().right());
                    }
                }
            }
        }
    }

    #[test]
    fn generated_grid_is_solved_before_scrambling() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = generate(&config(3, 3, 9), &mut rng).unwrap();
        assert!(rules::is_solved(&grid));
    }

    #[test]
    fn edge_values_stay_within_label_range() {
        let mut rng = StdRng::seed_from_u64(11);
        let grid = generate(&config(4, 4, 3), &mut rng).unwrap();
        for tile in grid.tiles() {
            for side in crate::tile::Side::ALL {
                let value = tile.edge(side);
                assert!((1..=3).contains(&value));
            }
        }
    }

    #[test]
    fn tile_ids_count_up_in_row_major_order() {
        let mut rng = StdRng::seed_from_u64(3);
        let grid = generate(&config(2, 3, 5), &mut rng).unwrap();
        let ids: Vec<u32> = grid.tiles().map(|t| t.id()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn same_seed_generates_same_puzzle() {
        let grid_a = generate(&config(3, 3, 9), &mut StdRng::seed_from_u64(99)).unwrap();
        let grid_b = generate(&config(3, 3, 9), &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(grid_a, grid_b);
    }

    #[test]
    fn invalid_configuration_is_rejected() {
        // deserialization bypasses GameConfig::new, so generate revalidates
        let bad: GameConfig =
            serde_json::from_str(r#"{"rows":0,"cols":3,"labels":9,"seed":null}"#).unwrap();
        let err = generate(&bad, &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfiguration { .. }));
    }

    #[test]
    fn scramble_keeps_rotations_in_range() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut grid = generate(&config(3, 3, 9), &mut rng).unwrap();
        scramble_rotations(&mut grid, &mut rng);
        for tile in grid.tiles() {
            assert!(tile.rotation() < 4);
        }
    }

    #[test]
    fn scramble_leaves_base_edges_untouched() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut grid = generate(&config(3, 3, 9), &mut rng).unwrap();
        let solved = grid.clone();
        scramble_rotations(&mut grid, &mut rng);
        for tile in grid.tiles_mut() {
            tile.reset_rotation();
        }
        assert_eq!(grid, solved);
    }
}
