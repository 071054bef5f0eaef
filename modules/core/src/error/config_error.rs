//! Configuration-time validation errors.

use std::path::PathBuf;

/// Errors raised synchronously by builder configuration calls.
///
/// These indicate programmer or deployment mistakes and are never retried.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// A configured metadata directory does not exist or is not a directory.
  #[error("metadata directory {} does not exist", .path.display())]
  MissingDirectory {
    /// Path that failed the existence check.
    path: PathBuf,
  },
  /// The cache root could not be created.
  #[error("cache directory {} could not be created", .path.display())]
  CacheDirUnavailable {
    /// Cache root that was requested.
    path:   PathBuf,
    /// Underlying filesystem error.
    #[source]
    source: std::io::Error,
  },
  /// The cache root exists but is not writable.
  #[error("cache directory {} is not writable", .path.display())]
  CacheDirNotWritable {
    /// Cache root that failed the writability check.
    path: PathBuf,
  },
  /// A metadata directory was added twice for the same namespace prefix.
  #[error("metadata directory already registered for prefix {prefix:?}")]
  DuplicatePrefix {
    /// Namespace prefix that caused the collision.
    prefix: String,
  },
  /// A replacement was requested for a prefix that has no directory yet.
  #[error("no metadata directory registered for prefix {prefix:?}")]
  UnknownPrefix {
    /// Namespace prefix that was not found.
    prefix: String,
  },
}
