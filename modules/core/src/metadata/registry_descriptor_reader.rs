//! Default descriptor reader over a frozen registry.

use std::sync::Arc;

use super::{class_metadata::ClassMetadata, descriptor_reader::DescriptorReader, descriptor_registry::DescriptorRegistry};
use crate::error::EngineError;

/// Serves descriptors from a [`DescriptorRegistry`] snapshot.
pub struct RegistryDescriptorReader {
  registry: Arc<DescriptorRegistry>,
}

impl RegistryDescriptorReader {
  /// Creates a reader over the given registry snapshot.
  #[must_use]
  pub fn new(registry: Arc<DescriptorRegistry>) -> Self {
    Self { registry }
  }
}

impl DescriptorReader for RegistryDescriptorReader {
  fn read(&self, class_name: &str) -> Result<Option<ClassMetadata>, EngineError> {
    Ok(self.registry.describe(class_name))
  }
}
