//! # capgate CLI Module
//!
//! ## Available Commands
//!
//! - `check` - Ask whether one capture should be suppressed
//! - `show` - Print the effective configuration
//! - `validate` - Strictly parse the configuration file
//! - `serve` - Answer JSON-lines queries on stdin until EOF

mod commands;

use capgate_core::{CaptureError, primitives::DEFAULT_CONFIG_FILE};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// capgate - capture suppression for test runs
///
/// Tells a test framework whether to skip a screenshot or a recording for a
/// named test or suite, based on a shared JSON file.
#[derive(Parser, Debug)]
#[command(name = "capgate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose (debug) logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the capture configuration file
    #[arg(
        short,
        long,
        global = true,
        env = "CAPGATE_CONFIG",
        default_value = DEFAULT_CONFIG_FILE
    )]
    pub config: PathBuf,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check whether a capture should be suppressed
    Check {
        /// Test or suite name, matched exactly
        #[arg(short, long)]
        name: String,

        /// Capture kind (screenshot, recording)
        #[arg(short, long, default_value = "screenshot")]
        kind: String,
    },

    /// Show the effective configuration
    Show,

    /// Validate the configuration file (fails on missing or malformed files)
    Validate,

    /// Answer JSON-lines queries from stdin
    Serve,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), CaptureError> {
    let json_mode = cli.json_mode;

    match cli.command {
        Commands::Check { name, kind } => cmd_check(&cli.config, json_mode, &name, &kind),
        Commands::Show => cmd_show(&cli.config, json_mode),
        Commands::Validate => cmd_validate(&cli.config, json_mode),
        Commands::Serve => cmd_serve(&cli.config),
    }
}
