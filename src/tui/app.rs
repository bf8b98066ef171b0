//! Application state and logic.

use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rotavex::{GameConfig, GameSession};
use tracing::{debug, info};

/// Main application state.
pub struct App {
    session: GameSession,
    config: GameConfig,
    rng: StdRng,
    cursor: (usize, usize),
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates the application with a freshly scrambled puzzle.
    pub fn new(config: GameConfig) -> Result<Self> {
        let mut rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_entropy(),
        };
        let session = GameSession::new(config, &mut rng)?;
        let mut app = Self {
            session,
            config,
            rng,
            cursor: (0, 0),
            status_message: String::new(),
            should_quit: false,
        };
        app.refresh_status();
        Ok(app)
    }

    /// Current game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Cursor position as (row, col).
    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    /// Current status line.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Whether the main loop should exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Flags the main loop to exit.
    pub fn quit(&mut self) {
        info!("user quit");
        self.should_quit = true;
    }

    /// Moves the cursor, clamped to the grid.
    pub fn move_cursor(&mut self, delta_row: isize, delta_col: isize) {
        let (rows, cols) = (self.session.grid().rows(), self.session.grid().cols());
        let (r, c) = self.cursor;
        let r = r.saturating_add_signed(delta_row).min(rows - 1);
        let c = c.saturating_add_signed(delta_col).min(cols - 1);
        self.cursor = (r, c);
    }

    /// Rotates the tile under the cursor and re-polls solved status.
    pub fn rotate_at_cursor(&mut self) {
        let (r, c) = self.cursor;
        // cursor is clamped to the grid, so this cannot fail
        if let Err(e) = self.session.rotate(r, c) {
            debug!(error = %e, "rotate failed");
        }
        self.refresh_status();
    }

    /// Starts a fresh scrambled puzzle with the same configuration.
    pub fn new_game(&mut self) {
        info!("starting new game");
        // keep the seeded stream rolling so 'n' gives a different puzzle
        if let Err(e) = self.session.new_game(self.config, &mut self.rng) {
            debug!(error = %e, "new game failed");
        }
        self.cursor = (0, 0);
        self.refresh_status();
    }

    fn refresh_status(&mut self) {
        self.status_message = if self.session.is_solved() {
            "Puzzle solved! Press 'n' for a new game or 'q' to quit.".to_string()
        } else {
            "Keep rotating tiles until all adjacent labels match.".to_string()
        };
    }
}
