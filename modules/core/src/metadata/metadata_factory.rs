//! Memoizing metadata factory.


use std::sync::{Arc, RwLock};

use hashbrown::HashMap;

use super::{class_metadata::ClassMetadata, file_metadata_cache::FileMetadataCache, metadata_driver::MetadataDriver};
use crate::error::EngineError;

/// Resolves and memoizes merged class metadata.
///
/// Resolution loads the class through the driver, recursively merges the
/// `extends` chain (interface parents only when `include_interface_metadata`
/// is set), and memoizes the result. A file cache, when configured, persists
/// resolved entries across processes; with `debug` enabled the file cache is
/// bypassed on reads so source edits take effect immediately.
pub struct MetadataFactory {
  driver:                     Arc<dyn MetadataDriver>,
  include_interface_metadata: bool,
  debug:                      bool,
  cache:                      Option<FileMetadataCache>,
  resolved:                   RwLock<HashMap<String, Option<Arc<ClassMetadata>>>>,
}

impl MetadataFactory {
  /// Creates a factory over the given driver.
  #[must_use]
  pub fn new(
    driver: Arc<dyn MetadataDriver>,
    include_interface_metadata: bool,
    debug: bool,
    cache: Option<FileMetadataCache>,
  ) -> Self {
    Self { driver, include_interface_metadata, debug, cache, resolved: RwLock::new(HashMap::new()) }
  }

  /// Returns merged metadata for the named class, `None` when undeclared.
  ///
  /// # Errors
  ///
  /// Returns [`EngineError::MetadataFailure`] when a driver source fails or
  /// the `extends` chain is cyclic.
  pub fn metadata_for(&self, class_name: &str) -> Result<Option<Arc<ClassMetadata>>, EngineError> {
    if let Some(hit) = self.memo_lookup(class_name) {
      return Ok(hit);
    }
    if !self.debug
      && let Some(cache) = &self.cache
      && let Some(metadata) = cache.load(class_name)
    {
      let entry = Some(Arc::new(metadata));
      self.memo_store(class_name, entry.clone());
      return Ok(entry);
    }
    let mut seen = Vec::new();
    let resolved = self.resolve(class_name, &mut seen)?;
    if let (Some(cache), Some(metadata)) = (&self.cache, &resolved) {
      cache.save(metadata);
    }
    let entry = resolved.map(Arc::new);
    self.memo_store(class_name, entry.clone());
    Ok(entry)
  }

  /// Returns the ancestry chain for handler dispatch, most derived first.
  ///
  /// Classes without metadata still contribute their own name so handlers
  /// can match types the metadata pipeline does not describe.
  ///
  /// # Errors
  ///
  /// Returns [`EngineError::MetadataFailure`] when a driver source fails.
  pub fn ancestry(&self, class_name: &str) -> Result<Vec<String>, EngineError> {
    let mut chain = vec![class_name.to_string()];
    let mut current = class_name.to_string();
    while let Some(metadata) = self.metadata_for(&current)? {
      let Some(parent) = metadata.extends() else {
        break;
      };
      if chain.iter().any(|entry| entry == parent) {
        break;
      }
      chain.push(parent.to_string());
      current = parent.to_string();
    }
    Ok(chain)
  }

  fn resolve(&self, class_name: &str, seen: &mut Vec<String>) -> Result<Option<ClassMetadata>, EngineError> {
    if seen.iter().any(|entry| entry == class_name) {
      return Err(EngineError::MetadataFailure { class: class_name.into(), detail: "cyclic extends chain".into() });
    }
    seen.push(class_name.to_string());
    let Some(mut metadata) = self.driver.load_metadata(class_name)? else {
      return Ok(None);
    };
    if let Some(parent_name) = metadata.extends().map(str::to_string) {
      let parent = match self.memo_lookup(&parent_name) {
        | Some(hit) => hit,
        | None => self.resolve(&parent_name, seen)?.map(Arc::new),
      };
      if let Some(parent) = parent
        && (!parent.is_interface() || self.include_interface_metadata)
      {
        metadata.merge_parent(&parent);
      }
    }
    Ok(Some(metadata))
  }

  fn memo_lookup(&self, class_name: &str) -> Option<Option<Arc<ClassMetadata>>> {
    let memo = self.resolved.read().unwrap_or_else(std::sync::PoisonError::into_inner);
    memo.get(class_name).cloned()
  }

  fn memo_store(&self, class_name: &str, entry: Option<Arc<ClassMetadata>>) {
    let mut memo = self.resolved.write().unwrap_or_else(std::sync::PoisonError::into_inner);
    memo.insert(class_name.into(), entry);
  }
}
