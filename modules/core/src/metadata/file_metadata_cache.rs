//! File-backed cache for resolved class metadata.

use std::{fs, path::PathBuf};

use super::class_metadata::ClassMetadata;

/// Persists resolved metadata as JSON blobs under `<cacheRoot>/metadata`.
///
/// The cache is an optimization: read and write failures are logged and the
/// pipeline falls back to a fresh resolution.
pub struct FileMetadataCache {
  dir: PathBuf,
}

impl FileMetadataCache {
  /// Creates a cache rooted at `dir`.
  #[must_use]
  pub const fn new(dir: PathBuf) -> Self {
    Self { dir }
  }

  /// Loads a cached entry, discarding unreadable or corrupt blobs.
  #[must_use]
  pub fn load(&self, class_name: &str) -> Option<ClassMetadata> {
    let path = self.dir.join(cache_file_name(class_name));
    if !path.is_file() {
      return None;
    }
    let blob = match fs::read_to_string(&path) {
      | Ok(blob) => blob,
      | Err(error) => {
        tracing::warn!(target: "vellum::metadata", class = class_name, %error, "metadata cache entry unreadable");
        return None;
      },
    };
    match serde_json::from_str(&blob) {
      | Ok(metadata) => Some(metadata),
      | Err(error) => {
        tracing::warn!(target: "vellum::metadata", class = class_name, %error, "discarding corrupt metadata cache entry");
        None
      },
    }
  }

  /// Writes a resolved entry, logging failures instead of surfacing them.
  pub fn save(&self, metadata: &ClassMetadata) {
    let path = self.dir.join(cache_file_name(metadata.class_name()));
    match serde_json::to_string(metadata) {
      | Ok(blob) => {
        if let Err(error) = fs::write(&path, blob) {
          tracing::warn!(target: "vellum::metadata", class = metadata.class_name(), %error, "metadata cache write failed");
        }
      },
      | Err(error) => {
        tracing::warn!(target: "vellum::metadata", class = metadata.class_name(), %error, "metadata cache encode failed");
      },
    }
  }
}

/// Maps a class name onto a filesystem-safe cache file name.
pub(crate) fn cache_file_name(class_name: &str) -> String {
  let mut name: String = class_name
    .chars()
    .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-' { c } else { '_' })
    .collect();
  name.push_str(".json");
  name
}
