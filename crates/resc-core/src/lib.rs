//! # resc-core
//!
//! Core functionality for resc - deterministic resource caching and
//! calibration constants for detector data pipelines.
//!
//! A *resource identifier* is a string naming either a local file or a
//! remote URL. [`ResourceCache`] resolves identifiers to their contents,
//! fetching and persisting remote resources exactly once under a
//! deterministic hash of the identifier, so repeated lookups across runs
//! and processes hit local storage instead of the network.
//!
//! ## Quick Start
//!
//! ```no_run
//! use resc_core::{Config, ResourceCache, Result};
//!
//! # async fn example() -> Result<()> {
//! let config = Config::load()?;
//! let cache = ResourceCache::new(&config.paths.cache_root)?;
//!
//! // Local files are read directly; URLs are fetched once and cached.
//! let text = cache.get_text("detector_map.txt").await?;
//! let blob = cache.get_bytes("https://example.com/nn_weights.bin").await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, Error>`]. Nothing is retried or
//! substituted internally; a failed retrieval, a missing local file, or a
//! text-mode request for non-UTF-8 bytes each surface as their own
//! [`Error`] variant.

/// Per-channel calibration constants and data-file URL helpers
pub mod calibration;
/// Disk-backed resolution of resource identifiers
pub mod cache;
/// Configuration loading and defaults
pub mod config;
/// Error types and result aliases
pub mod error;
/// HTTP retrieval of remote resources
pub mod fetcher;
/// Deterministic hashing of resource identifiers
pub mod hash;
/// Run database capability seam
pub mod rundb;

// Re-export commonly used types
pub use cache::ResourceCache;
pub use config::{Config, FetchConfig, PathsConfig};
pub use error::{Error, Result};
pub use fetcher::Fetcher;
pub use hash::deterministic_hash;
pub use rundb::{RunDatabase, StaticRunDatabase};
