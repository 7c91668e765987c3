//! CLI structure and argument parsing.
//!
//! The interface follows a standard command-subcommand pattern built with
//! clap derive macros:
//!
//! ```bash
//! # Resolve a resource (local path or URL; URLs are cached on first use)
//! resc get detector_map.txt
//! resc get https://example.com/nn_weights.bin --binary -o weights.bin
//!
//! # Cache maintenance
//! resc info
//! resc info --format json
//! resc clear --force
//!
//! # Calibration constants
//! resc gain 42
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Main CLI structure for the `resc` command.
#[derive(Debug, Parser)]
#[command(name = "resc", version, about = "Deterministic resource cache for detector data pipelines")]
pub struct Cli {
    /// Enable verbose logging output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Enable debug-level logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Cache directory override (defaults to configuration, then ./resource_cache)
    #[arg(long, global = true, value_name = "DIR", env = "RESC_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve a resource identifier and print or save its contents
    Get {
        /// Local file path or remote URL
        identifier: String,

        /// Treat the resource as binary instead of UTF-8 text
        #[arg(long)]
        binary: bool,

        /// Write contents to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show cache root, entry count, and total size
    Info {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Delete all cache entries
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Print the ADC->PE gain factor for a channel
    Gain {
        /// Channel number
        channel: usize,
    },
}

/// Output format for machine-facing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable formatted output
    Text,
    /// Machine-readable JSON
    Json,
}
