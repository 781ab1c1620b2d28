//! # Trainer CLI Module
//!
//! ## Available Commands
//!
//! - `play` - Interactive play loop over stdin/stdout (default)
//! - `solve` - Print the full Prim run for the graph
//! - `check` - Print graph metrics

mod commands;

use clap::{Parser, Subcommand};
use prim_trainer::TrainerError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Prim Trainer
///
/// Grow a minimum spanning tree by hand and have every pick checked
/// against Prim's algorithm.
#[derive(Parser, Debug)]
#[command(name = "prim-trainer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format (one object per line)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Graph file (TOML). Defaults to the built-in demo town.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play interactively, one command per line
    Play,

    /// Print the edges Prim's algorithm adds, in order
    Solve {
        /// Start node ID (overrides the graph file)
        #[arg(short, long)]
        start: Option<u64>,
    },

    /// Validate the graph file and print its metrics
    Check,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), TrainerError> {
    let json_mode = cli.json_mode;
    let config = cli.config.as_deref();

    match cli.command {
        Some(Commands::Play) | None => cmd_play(config, json_mode),
        Some(Commands::Solve { start }) => cmd_solve(config, json_mode, start),
        Some(Commands::Check) => cmd_check(config, json_mode),
    }
}
