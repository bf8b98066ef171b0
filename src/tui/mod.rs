//! Terminal UI for the rotation puzzle.
//!
//! A synchronous event loop: draw the current grid, wait for a key, apply
//! the matching session call, repeat. All mutation goes through the
//! `GameSession`; the UI only polls its state after each interaction.

mod app;
mod input;
mod ui;

use anyhow::Result;
use app::App;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use rotavex::GameConfig;
use std::io;
use std::time::Duration;
use tracing::{debug, error, info};

/// Runs the TUI until the player quits.
pub fn run_tui(config: GameConfig) -> Result<()> {
    // Log to a file so tracing output does not fight the alternate screen.
    let log_file = std::fs::File::create("rotavex.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(?config, "starting rotavex TUI");

    let mut app = App::new(config)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "TUI loop error");
    }
    res
}

/// Draw/input loop. Every session call completes before the next draw.
fn run_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if app.should_quit() {
            return Ok(());
        }

        if !event::poll(Duration::from_millis(200))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => app.quit(),
            KeyCode::Char('n') => app.new_game(),
            KeyCode::Char(' ') | KeyCode::Enter => {
                app.rotate_at_cursor();
                if app.session().is_solved() {
                    info!("puzzle solved");
                }
            }
            code => {
                if let Some((dr, dc)) = input::cursor_delta(code) {
                    debug!(?code, "moving cursor");
                    app.move_cursor(dr, dc);
                }
            }
        }
    }
}
