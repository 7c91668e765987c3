//! Error types and handling for resc-core operations.
//!
//! Failures fall into a small taxonomy: I/O, network retrieval, missing
//! resources, text decoding, configuration, and cache storage. None of them
//! are recovered internally; every operation propagates its error to the
//! caller. [`Error::is_recoverable`] exists so callers can decide whether a
//! retry of their own is worth attempting, and [`Error::category`] provides
//! a stable identifier for structured log fields.

use thiserror::Error;

/// The main error type for resc-core operations.
///
/// All public functions in resc-core return `Result<T, Error>`. The enum
/// preserves underlying `std::io::Error` and `reqwest::Error` sources so the
/// full chain stays inspectable through `source()`.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed.
    ///
    /// Covers reading local resources, creating the cache root, and
    /// persisting fetched content.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Network retrieval failed.
    ///
    /// A remote resource could not be fetched: connection failure, timeout,
    /// or a non-success HTTP status other than 404.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Requested resource was not found.
    ///
    /// A local path that does not exist, or a remote resource answering
    /// with HTTP 404.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Content could not be decoded as text.
    ///
    /// Raised when a resource is requested in text mode but its bytes are
    /// not valid UTF-8. Also what a caller sees after mixing binary and
    /// text modes for the same identifier; that mismatch is caller misuse
    /// and is never corrected internally.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Configuration is invalid or inaccessible.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Cache storage operation failed.
    ///
    /// Covers failures beyond plain file I/O, such as atomically persisting
    /// a fetched resource into the cache root.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl Error {
    /// Check if the error might be recoverable through retry logic.
    ///
    /// resc itself never retries; this is a hint for callers. Network
    /// timeouts and connection failures are typically transient, as are
    /// interrupted I/O operations. Everything else (missing files, decode
    /// failures, bad configuration) is permanent.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Network(e) => e.is_timeout() || e.is_connect(),
            Self::Io(e) => {
                matches!(
                    e.kind(),
                    std::io::ErrorKind::TimedOut | std::io::ErrorKind::Interrupted
                )
            },
            _ => false,
        }
    }

    /// Get the error category as a string identifier.
    ///
    /// Stable identifiers for logging and metrics: `"io"`, `"network"`,
    /// `"not_found"`, `"decode"`, `"config"`, `"storage"`.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::Network(_) => "network",
            Self::NotFound(_) => "not_found",
            Self::Decode(_) => "decode",
            Self::Config(_) => "config",
            Self::Storage(_) => "storage",
        }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display_formatting() {
        let errors = vec![
            Error::NotFound("missing.txt".to_string()),
            Error::Decode("invalid utf-8".to_string()),
            Error::Config("bad timeout".to_string()),
            Error::Storage("persist failed".to_string()),
        ];

        for error in errors {
            let error_string = error.to_string();
            assert!(!error_string.is_empty());
            match error {
                Error::NotFound(msg) => {
                    assert!(error_string.contains("Not found"));
                    assert!(error_string.contains(&msg));
                },
                Error::Decode(msg) => {
                    assert!(error_string.contains("Decode error"));
                    assert!(error_string.contains(&msg));
                },
                Error::Config(msg) => {
                    assert!(error_string.contains("Configuration error"));
                    assert!(error_string.contains(&msg));
                },
                Error::Storage(msg) => {
                    assert!(error_string.contains("Storage error"));
                    assert!(error_string.contains(&msg));
                },
                _ => {},
            }
        }
    }

    #[test]
    fn test_error_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let error: Error = io_err.into();

        match error {
            Error::Io(inner) => assert!(inner.to_string().contains("access denied")),
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_error_categories() {
        let cases = vec![
            (Error::Io(io::Error::other("x")), "io"),
            (Error::NotFound("x".to_string()), "not_found"),
            (Error::Decode("x".to_string()), "decode"),
            (Error::Config("x".to_string()), "config"),
            (Error::Storage("x".to_string()), "storage"),
        ];

        for (error, expected) in cases {
            assert_eq!(error.category(), expected);
        }
    }

    #[test]
    fn test_error_recoverability() {
        let recoverable = vec![
            Error::Io(io::Error::new(io::ErrorKind::TimedOut, "timeout")),
            Error::Io(io::Error::new(io::ErrorKind::Interrupted, "interrupted")),
        ];
        let permanent = vec![
            Error::Io(io::Error::new(io::ErrorKind::NotFound, "not found")),
            Error::NotFound("missing".to_string()),
            Error::Decode("bad bytes".to_string()),
            Error::Config("bad config".to_string()),
            Error::Storage("corrupt".to_string()),
        ];

        for error in recoverable {
            assert!(error.is_recoverable(), "Expected {error:?} to be recoverable");
        }
        for error in permanent {
            assert!(!error.is_recoverable(), "Expected {error:?} to be permanent");
        }
    }

    #[test]
    fn test_error_chain_source() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let error: Error = io_error.into();

        let source = std::error::Error::source(&error);
        assert!(source.is_some());
        assert!(source.unwrap().to_string().contains("access denied"));
    }
}
