//! File-backed cache decorator for descriptor readers.


use std::{fs, path::PathBuf, sync::Arc};

use super::{class_metadata::ClassMetadata, descriptor_reader::DescriptorReader, file_metadata_cache::cache_file_name};
use crate::error::EngineError;

/// Caches descriptor reads as JSON blobs under `<cacheRoot>/annotations`.
///
/// With `debug` enabled every read goes back to the inner reader and the
/// cache entry is rewritten, so stale entries never survive a source change.
pub struct CachedDescriptorReader {
  inner: Arc<dyn DescriptorReader>,
  dir:   PathBuf,
  debug: bool,
}

impl CachedDescriptorReader {
  /// Creates a cache decorator rooted at `dir`.
  #[must_use]
  pub fn new(inner: Arc<dyn DescriptorReader>, dir: PathBuf, debug: bool) -> Self {
    Self { inner, dir, debug }
  }

  fn cache_path(&self, class_name: &str) -> PathBuf {
    self.dir.join(cache_file_name(class_name))
  }
}

impl DescriptorReader for CachedDescriptorReader {
  fn read(&self, class_name: &str) -> Result<Option<ClassMetadata>, EngineError> {
    let path = self.cache_path(class_name);
    if !self.debug && path.is_file() {
      match fs::read_to_string(&path) {
        | Ok(blob) => match serde_json::from_str::<ClassMetadata>(&blob) {
          | Ok(metadata) => return Ok(Some(metadata)),
          | Err(error) => {
            tracing::warn!(target: "vellum::metadata", class = class_name, %error, "discarding corrupt descriptor cache entry");
          },
        },
        | Err(error) => {
          tracing::warn!(target: "vellum::metadata", class = class_name, %error, "descriptor cache entry unreadable");
        },
      }
    }
    let metadata = self.inner.read(class_name)?;
    if let Some(metadata) = &metadata {
      match serde_json::to_string(metadata) {
        | Ok(blob) => {
          if let Err(error) = fs::write(&path, blob) {
            tracing::warn!(target: "vellum::metadata", class = class_name, %error, "descriptor cache write failed");
          }
        },
        | Err(error) => {
          tracing::warn!(target: "vellum::metadata", class = class_name, %error, "descriptor cache encode failed");
        },
      }
    }
    Ok(metadata)
  }
}
