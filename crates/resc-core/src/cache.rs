//! Disk-backed resolution of resource identifiers.
//!
//! A resource identifier is either a local filesystem path or a remote URL,
//! told apart by the presence of a scheme separator (`"://"`). Local paths
//! are read directly. Remote identifiers are fetched exactly once and the
//! body is persisted under the cache root, named by the deterministic hash
//! of the identifier string; every later request reads that file. Entries
//! are never invalidated, refreshed, or evicted — a stale entry is served
//! until someone removes the file externally.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::hash::deterministic_hash;
use crate::{Error, Fetcher, Result};

/// How a resource's bytes are to be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Text,
    Binary,
}

/// Resolves resource identifiers to their contents, caching remote fetches
/// on local storage.
///
/// The cache root is explicit configuration, passed at construction; its
/// lifecycle is scoped to this instance, not the process. For a given
/// identifier and root, at most one cache file is ever created. Writes go
/// to a temporary file in the root and are renamed into place, so a cache
/// file that exists is always complete.
///
/// Concurrent callers racing on the same uncached identifier are not
/// synchronized: both may fetch, both writes carry identical bytes, and the
/// atomic rename makes the race last-writer-wins.
///
/// The text/binary mode used on the first fetch of an identifier must match
/// the mode used on later calls. Caching binary content and re-requesting
/// it as text surfaces as a decode error; that is caller misuse and is not
/// corrected here.
pub struct ResourceCache {
    root: PathBuf,
    fetcher: Fetcher,
}

impl ResourceCache {
    /// Creates a cache rooted at `root` with a default [`Fetcher`].
    ///
    /// The directory is created lazily, on the first remote fetch.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            root: root.into(),
            fetcher: Fetcher::new()?,
        })
    }

    /// Creates a cache rooted at `root` using a caller-configured fetcher.
    pub fn with_fetcher(root: impl Into<PathBuf>, fetcher: Fetcher) -> Self {
        Self {
            root: root.into(),
            fetcher,
        }
    }

    /// Returns the cache root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether an identifier names a remote resource.
    ///
    /// Anything containing a scheme separator is treated as remote; no
    /// further well-formedness check is applied.
    #[must_use]
    pub fn is_remote(identifier: &str) -> bool {
        identifier.contains("://")
    }

    /// The on-disk path a remote identifier caches to.
    ///
    /// Returns `None` for local identifiers, which are never copied into
    /// the cache.
    #[must_use]
    pub fn entry_path(&self, identifier: &str) -> Option<PathBuf> {
        Self::is_remote(identifier).then(|| self.root.join(deterministic_hash(identifier)))
    }

    /// Returns a resource's contents decoded as UTF-8 text.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if a local path does not exist, [`Error::Decode`]
    /// if the bytes are not valid UTF-8, [`Error::Network`] or
    /// [`Error::NotFound`] if a remote retrieval fails.
    pub async fn get_text(&self, identifier: &str) -> Result<String> {
        let path = self.resolve(identifier, Mode::Text).await?;
        read_text(&path)
    }

    /// Returns a resource's contents as raw bytes.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if a local path does not exist, [`Error::Network`]
    /// or [`Error::NotFound`] if a remote retrieval fails.
    pub async fn get_bytes(&self, identifier: &str) -> Result<Vec<u8>> {
        let path = self.resolve(identifier, Mode::Binary).await?;
        read_bytes(&path)
    }

    /// Collapses an identifier to a local path, fetching and caching remote
    /// resources first.
    async fn resolve(&self, identifier: &str, mode: Mode) -> Result<PathBuf> {
        if Self::is_remote(identifier) {
            self.ensure_cached(identifier, mode).await
        } else {
            Ok(PathBuf::from(identifier))
        }
    }

    /// Guarantees a cache entry exists for `url` and returns its path.
    ///
    /// The entry is created on the first call for a given URL and read
    /// back untouched on every later one.
    async fn ensure_cached(&self, url: &str, mode: Mode) -> Result<PathBuf> {
        let path = self.root.join(deterministic_hash(url));

        fs::create_dir_all(&self.root)
            .map_err(|e| Error::Storage(format!("Failed to create cache root: {e}")))?;

        if path.exists() {
            debug!("Cache hit for {} at {}", url, path.display());
            return Ok(path);
        }

        let body = self.fetcher.fetch(url).await?;

        // In text mode the body must decode before anything is persisted,
        // so a decode failure leaves no cache entry behind.
        let body = match mode {
            Mode::Text => String::from_utf8(body)
                .map_err(|e| Error::Decode(format!("Resource '{url}' is not valid UTF-8: {e}")))?
                .into_bytes(),
            Mode::Binary => body,
        };

        persist_atomic(&self.root, &path, &body)?;
        info!("Cached {} ({} bytes) at {}", url, body.len(), path.display());

        Ok(path)
    }
}

/// Writes `bytes` to a temporary file in `root` and renames it onto `path`.
///
/// The temporary file lives in the cache root itself so the rename never
/// crosses a filesystem boundary.
fn persist_atomic(root: &Path, path: &Path, bytes: &[u8]) -> Result<()> {
    let mut tmp = tempfile::NamedTempFile::new_in(root)
        .map_err(|e| Error::Storage(format!("Failed to create temporary cache file: {e}")))?;
    tmp.write_all(bytes)?;
    tmp.persist(path)
        .map_err(|e| Error::Storage(format!("Failed to persist cache entry: {e}")))?;
    Ok(())
}

fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::NotFound(format!("No such resource: '{}'", path.display()))
        } else {
            Error::Io(e)
        }
    })
}

fn read_text(path: &Path) -> Result<String> {
    let bytes = read_bytes(path)?;
    String::from_utf8(bytes).map_err(|e| {
        Error::Decode(format!(
            "Resource '{}' is not valid UTF-8: {e}",
            path.display()
        ))
    })
}
