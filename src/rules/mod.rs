//! Win condition rules for the rotation puzzle.

mod win;

pub use win::is_solved;
