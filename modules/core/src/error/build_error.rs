//! Build-time errors.

use std::path::PathBuf;

/// Errors raised by [`SerializerBuilder::build`](crate::builder::SerializerBuilder::build).
///
/// Directory and permission validation already happened at configuration
/// time; the only filesystem work left for `build()` is cache subtree
/// creation.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
  /// A cache subtree under the configured cache root could not be created.
  #[error("cache subtree {} could not be created", .path.display())]
  CacheSubtree {
    /// Subtree that was requested.
    path:   PathBuf,
    /// Underlying filesystem error.
    #[source]
    source: std::io::Error,
  },
}
