//! Rotavex - a Tetravex-style tile rotation puzzle
//!
//! A fixed grid is pre-filled with tiles whose four edges carry numeric
//! labels. Tile positions are fixed; only orientations are scrambled. The
//! player rotates tiles in place until every adjacent edge pair matches.
//!
//! # Architecture
//!
//! - **Tile**: four edge labels plus a rotation offset (mod 4)
//! - **Generator**: builds a solved grid in one row-major sweep, then
//!   scrambles each tile's rotation independently
//! - **Rules**: adjacency win check
//! - **Session**: orchestration surface the presentation layer calls
//!
//! # Example
//!
//! ```
//! use rotavex::{GameConfig, GameSession};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! # fn example() -> Result<(), rotavex::GameError> {
//! let config = GameConfig::new(3, 3, 9, Some(42))?;
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut session = GameSession::new(config, &mut rng)?;
//!
//! session.rotate(0, 0)?;
//! let solved = session.is_solved();
//! # let _ = solved;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod error;
mod generator;
mod grid;
mod rules;
mod session;
mod tile;

// Crate-level exports - configuration
pub use config::GameConfig;

// Crate-level exports - errors
pub use error::GameError;

// Crate-level exports - generation
pub use generator::{generate, scramble_rotations};

// Crate-level exports - grid and tiles
pub use grid::Grid;
pub use tile::{Side, Tile};

// Crate-level exports - win rules
pub use rules::is_solved;

// Crate-level exports - session orchestration
pub use session::GameSession;
