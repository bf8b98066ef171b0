//! Command-line interface for rotavex.

use clap::{Parser, Subcommand};

/// Rotavex - Tetravex-style tile rotation puzzle
#[derive(Parser, Debug)]
#[command(name = "rotavex")]
#[command(about = "Tile rotation puzzle for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play the puzzle in the terminal UI
    Play {
        /// Grid rows
        #[arg(long, default_value = "3")]
        rows: usize,

        /// Grid columns
        #[arg(long, default_value = "3")]
        cols: usize,

        /// Number of distinct edge labels (1-9)
        #[arg(long, default_value = "9")]
        labels: u8,

        /// RNG seed for a reproducible puzzle
        #[arg(long)]
        seed: Option<u64>,
    },
}
