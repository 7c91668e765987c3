//! resc CLI - deterministic resource cache for detector data pipelines
//!
//! This is the main entry point for the resc command-line interface.
//! Command implementations live in separate modules under `commands`.

use anyhow::Result;
use clap::Parser;
use resc_core::Config;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod cli;
mod commands;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_logging(&cli)?;
    execute_command(cli).await
}

fn initialize_logging(cli: &Cli) -> Result<()> {
    let level = if cli.verbose || cli.debug {
        Level::DEBUG
    } else {
        Level::WARN
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Resolve the cache root: explicit flag first, then configuration
/// (which itself honors `RESC_CACHE_DIR`).
fn resolve_cache_root(cli: &Cli, config: &Config) -> PathBuf {
    cli.cache_dir
        .clone()
        .unwrap_or_else(|| config.paths.cache_root.clone())
}

async fn execute_command(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let cache_root = resolve_cache_root(&cli, &config);

    match cli.command {
        Commands::Get {
            identifier,
            binary,
            output,
        } => {
            commands::get::execute(
                &cache_root,
                config.timeout(),
                &identifier,
                binary,
                output.as_deref(),
            )
            .await
        },
        Commands::Info { format } => commands::info::execute(&cache_root, format),
        Commands::Clear { force } => commands::clear::run(&cache_root, force),
        Commands::Gain { channel } => commands::gain::execute(channel),
    }
}
