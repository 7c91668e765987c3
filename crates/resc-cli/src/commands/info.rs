//! Command to display cache statistics.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;

/// Summary of the cache directory state.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheInfo {
    /// Cache root directory
    pub cache_root: PathBuf,
    /// Whether the cache root exists on disk
    pub exists: bool,
    /// Number of cache entries
    pub entries: usize,
    /// Total size of all entries in bytes
    pub size_bytes: u64,
}

/// Gather statistics for a cache root.
///
/// A missing root is reported as empty rather than an error: the directory
/// is only created on the first remote fetch.
pub fn gather(cache_root: &Path) -> Result<CacheInfo> {
    let mut entries = 0;
    let mut size_bytes = 0;
    let exists = cache_root.exists();

    if exists {
        for entry in fs::read_dir(cache_root)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                entries += 1;
                size_bytes += entry.metadata()?.len();
            }
        }
    }

    Ok(CacheInfo {
        cache_root: cache_root.to_path_buf(),
        exists,
        entries,
        size_bytes,
    })
}

/// Execute the info command.
pub fn execute(cache_root: &Path, format: OutputFormat) -> Result<()> {
    let info = gather(cache_root)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&info)?),
        OutputFormat::Text => {
            println!("{} {}", "Cache root:".bold(), info.cache_root.display());
            if info.exists {
                println!("{} {}", "Entries:".bold(), info.entries);
                println!("{} {} bytes", "Total size:".bold(), info.size_bytes);
            } else {
                println!("{}", "Cache directory does not exist yet".dimmed());
            }
        },
    }

    Ok(())
}
