//! Cache clearing command implementation.

use anyhow::Result;
use colored::Colorize;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// High-level outcome produced by [`execute_clear`]. Useful for assertions in tests.
#[derive(Debug, PartialEq, Eq)]
pub enum ClearOutcome {
    /// No entries were present to clear.
    AlreadyEmpty,
    /// User cancelled the clear operation.
    Cancelled,
    /// Cache cleared with the number of entries removed.
    Cleared { cleared: usize },
}

/// Core clear implementation with injectable dependencies to enable deterministic tests.
///
/// # Errors
///
/// Returns an error if listing entries, confirmation, or deletion fails.
pub fn execute_clear<W, C>(
    cache_root: &Path,
    mut writer: W,
    force: bool,
    mut confirm: C,
) -> Result<ClearOutcome>
where
    W: Write,
    C: FnMut(usize) -> Result<bool>,
{
    let entries: Vec<_> = if cache_root.exists() {
        fs::read_dir(cache_root)?
            .collect::<io::Result<Vec<_>>>()?
            .into_iter()
            .filter(|e| e.path().is_file())
            .collect()
    } else {
        Vec::new()
    };

    if entries.is_empty() {
        writeln!(writer, "{} Cache is already empty", "ℹ".blue())?;
        return Ok(ClearOutcome::AlreadyEmpty);
    }

    writeln!(
        writer,
        "{} This will permanently delete {} cached entr{}",
        "⚠".yellow(),
        entries.len(),
        if entries.len() == 1 { "y" } else { "ies" }
    )?;

    if !force && !confirm(entries.len())? {
        writeln!(writer, "{} Cancelled", "✗".red())?;
        return Ok(ClearOutcome::Cancelled);
    }

    let cleared = entries.len();
    for entry in entries {
        fs::remove_file(entry.path())?;
    }

    writeln!(writer, "{} Cache cleared successfully", "✓".green())?;

    Ok(ClearOutcome::Cleared { cleared })
}

/// Clears the cache directory using terminal IO.
///
/// # Errors
///
/// Returns an error if directory access, user confirmation, or deletion fails.
pub fn run(cache_root: &Path, force: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut stdout_lock = stdout.lock();
    let mut input = String::new();

    execute_clear(cache_root, &mut stdout_lock, force, |_count| {
        let prompt_stdout = io::stdout();
        let mut prompt_lock = prompt_stdout.lock();
        write!(prompt_lock, "Are you sure you want to continue? [y/N] ")?;
        prompt_lock.flush()?;

        input.clear();
        io::stdin().read_line(&mut input)?;

        Ok(matches!(
            input.trim().to_ascii_lowercase().as_str(),
            "y" | "yes"
        ))
    })?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn populated_root(dir: &TempDir, n: usize) -> std::path::PathBuf {
        let root = dir.path().join("resource_cache");
        fs::create_dir_all(&root).unwrap();
        for i in 0..n {
            fs::write(root.join(format!("entry{i}")), b"x").unwrap();
        }
        root
    }

    #[test]
    fn test_clear_empty_cache() {
        let dir = TempDir::new().unwrap();
        let mut out = Vec::new();

        let outcome = execute_clear(&dir.path().join("absent"), &mut out, false, |_| {
            panic!("confirm should not be called for an empty cache")
        })
        .unwrap();

        assert_eq!(outcome, ClearOutcome::AlreadyEmpty);
    }

    #[test]
    fn test_clear_cancelled() {
        let dir = TempDir::new().unwrap();
        let root = populated_root(&dir, 2);
        let mut out = Vec::new();

        let outcome = execute_clear(&root, &mut out, false, |_| Ok(false)).unwrap();

        assert_eq!(outcome, ClearOutcome::Cancelled);
        assert_eq!(fs::read_dir(&root).unwrap().count(), 2);
    }

    #[test]
    fn test_clear_forced_skips_confirmation() {
        let dir = TempDir::new().unwrap();
        let root = populated_root(&dir, 3);
        let mut out = Vec::new();

        let outcome = execute_clear(&root, &mut out, true, |_| {
            panic!("confirm should not be called with --force")
        })
        .unwrap();

        assert_eq!(outcome, ClearOutcome::Cleared { cleared: 3 });
        assert_eq!(fs::read_dir(&root).unwrap().count(), 0);
    }

    #[test]
    fn test_clear_confirmed() {
        let dir = TempDir::new().unwrap();
        let root = populated_root(&dir, 1);
        let mut out = Vec::new();

        let outcome = execute_clear(&root, &mut out, false, |count| {
            assert_eq!(count, 1);
            Ok(true)
        })
        .unwrap();

        assert_eq!(outcome, ClearOutcome::Cleared { cleared: 1 });
    }
}
