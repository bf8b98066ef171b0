//! Tile and edge model for the rotation puzzle.

use serde::{Deserialize, Serialize};

/// One side of a tile, in clockwise order starting from the top.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Side {
    /// Top edge.
    Top,
    /// Right edge.
    Right,
    /// Bottom edge.
    Bottom,
    /// Left edge.
    Left,
}

impl Side {
    /// All four sides in clockwise order.
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    /// Clockwise index of this side (top = 0).
    pub fn index(self) -> usize {
        match self {
            Side::Top => 0,
            Side::Right => 1,
            Side::Bottom => 2,
            Side::Left => 3,
        }
    }

    /// Display label for this side.
    pub fn label(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Left => "left",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A puzzle tile: four edge labels and a rotation offset.
///
/// The base edges are fixed at creation; rotation only changes which
/// base edge faces which side. Edge values live in `1..=labels` for
/// whatever label count the grid was generated with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Stable identity, assigned in row-major generation order starting at 1.
    id: u32,
    /// Base edge values in `Side` order: top, right, bottom, left.
    edges: [u8; 4],
    /// Clockwise quarter-turns applied since creation, mod 4.
    rotation: u8,
}

impl Tile {
    /// Creates a tile at rotation 0 with the given base edges.
    pub fn new(id: u32, top: u8, right: u8, bottom: u8, left: u8) -> Self {
        Self {
            id,
            edges: [top, right, bottom, left],
            rotation: 0,
        }
    }

    /// Returns the tile's stable id.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Returns the accumulated rotation offset (0..4).
    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    /// Returns the edge value currently facing `side`.
    ///
    /// After `k` clockwise quarter-turns the value at side `s` is the base
    /// edge that started `k` positions counter-clockwise of `s`.
    pub fn edge(&self, side: Side) -> u8 {
        self.edges[(side.index() + 4 - self.rotation as usize) % 4]
    }

    /// Current top edge value.
    pub fn top(&self) -> u8 {
        self.edge(Side::Top)
    }

    /// Current right edge value.
    pub fn right(&self) -> u8 {
        self.edge(Side::Right)
    }

    /// Current bottom edge value.
    pub fn bottom(&self) -> u8 {
        self.edge(Side::Bottom)
    }

    /// Current left edge value.
    pub fn left(&self) -> u8 {
        self.edge(Side::Left)
    }

    /// Rotates the tile one quarter-turn clockwise.
    ///
    /// New top = old left, new right = old top, new bottom = old right,
    /// new left = old bottom.
    pub fn rotate_clockwise(&mut self) {
        self.rotation = (self.rotation + 1) % 4;
    }

    /// Resets the rotation offset to 0 without touching the base edges.
    pub fn reset_rotation(&mut self) {
        self.rotation = 0;
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "tile {} [{} {} {} {}]",
            self.id,
            self.top(),
            self.right(),
            self.bottom(),
            self.left()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tile_starts_unrotated() {
        let tile = Tile::new(1, 1, 2, 3, 4);
        assert_eq!(tile.rotation(), 0);
        assert_eq!(tile.top(), 1);
        assert_eq!(tile.right(), 2);
        assert_eq!(tile.bottom(), 3);
        assert_eq!(tile.left(), 4);
    }

    #[test]
    fn clockwise_rotation_shifts_edges() {
        let mut tile = Tile::new(1, 1, 2, 3, 4);
        tile.rotate_clockwise();
        // new top = old left, and so on around the tile
        assert_eq!(tile.top(), 4);
        assert_eq!(tile.right(), 1);
        assert_eq!(tile.bottom(), 2);
        assert_eq!(tile.left(), 3);
    }

    #[test]
    fn four_rotations_are_identity() {
        let original = Tile::new(7, 5, 6, 7, 8);
        let mut tile = original.clone();
        for _ in 0..4 {
            tile.rotate_clockwise();
        }
        for side in Side::ALL {
            assert_eq!(tile.edge(side), original.edge(side));
        }
        assert_eq!(tile.rotation(), 0);
    }

    #[test]
    fn reset_rotation_restores_base_mapping() {
        let mut tile = Tile::new(3, 9, 8, 7, 6);
        tile.rotate_clockwise();
        tile.rotate_clockwise();
        tile.reset_rotation();
        assert_eq!(tile.rotation(), 0);
        assert_eq!(tile.top(), 9);
        assert_eq!(tile.left(), 6);
    }

    #[test]
    fn rotation_never_changes_edge_multiset() {
        let mut tile = Tile::new(1, 1, 2, 3, 4);
        for _ in 0..3 {
            tile.rotate_clockwise();
            let mut values: Vec<u8> = Side::ALL.iter().map(|&s| tile.edge(s)).collect();
            values.sort_unstable();
            assert_eq!(values, vec![1, 2, 3, 4]);
        }
    }
}
