//! Resource resolution command implementation.

use anyhow::{Context, Result};
use resc_core::{Fetcher, ResourceCache};
use std::io::Write;
use std::path::Path;
use std::time::Duration;

/// Resolve `identifier` through the cache and print or save its contents.
///
/// Text resources go to stdout verbatim; binary resources go to stdout as
/// raw bytes unless `-o` redirects them to a file.
pub async fn execute(
    cache_root: &Path,
    timeout: Duration,
    identifier: &str,
    binary: bool,
    output: Option<&Path>,
) -> Result<()> {
    let cache = ResourceCache::with_fetcher(cache_root, Fetcher::with_timeout(timeout)?);

    let bytes = if binary {
        cache.get_bytes(identifier).await?
    } else {
        cache.get_text(identifier).await?.into_bytes()
    };

    match output {
        Some(path) => {
            std::fs::write(path, &bytes)
                .with_context(|| format!("Failed to write output to '{}'", path.display()))?;
        },
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            lock.write_all(&bytes)?;
            lock.flush()?;
        },
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_get_local_file_to_output_path() {
        let dir = TempDir::new().unwrap();
        let data = dir.path().join("data.txt");
        std::fs::write(&data, "hello").unwrap();
        let out = dir.path().join("out.txt");

        execute(
            &dir.path().join("cache"),
            Duration::from_secs(5),
            data.to_str().unwrap(),
            false,
            Some(&out),
        )
        .await
        .unwrap();

        assert_eq!(std::fs::read_to_string(&out).unwrap(), "hello");
    }

    #[tokio::test]
    async fn test_get_missing_local_file_fails() {
        let dir = TempDir::new().unwrap();

        let result = execute(
            &dir.path().join("cache"),
            Duration::from_secs(5),
            "/nonexistent/path",
            false,
            None,
        )
        .await;
        assert!(result.is_err());
    }
}
