//! Rotavex - terminal tile rotation puzzle.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use rotavex::GameConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            rows,
            cols,
            labels,
            seed,
        } => {
            // the terminal palette carries nine label colors
            anyhow::ensure!(
                (1..=9).contains(&labels),
                "labels must be between 1 and 9, got {labels}"
            );
            let config = GameConfig::new(rows, cols, labels, seed)?;
            tui::run_tui(config)
        }
    }
}
