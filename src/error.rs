//! Error types for the puzzle core.

use derive_more::{Display, Error};

/// Errors reported by the puzzle core.
///
/// Both variants are local, synchronous, and recoverable: invalid input is
/// a programming error at the call site, not a runtime condition to retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Coordinates outside the current grid.
    #[display("position ({}, {}) is outside the {}x{} grid", row, col, rows, cols)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Grid row count.
        rows: usize,
        /// Grid column count.
        cols: usize,
    },

    /// Non-positive dimension or label count at generation time.
    #[display("invalid configuration: rows={}, cols={}, labels={} (all must be at least 1)", rows, cols, labels)]
    InvalidConfiguration {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
        /// Requested number of distinct edge labels.
        labels: u8,
    },
}
