//! Default construction strategy.

use std::sync::Arc;

use super::object_constructor::ObjectConstructor;
use crate::{error::EngineError, metadata::{ClassMetadata, DescriptorRegistry}, reflective::Reflective};

/// Instantiates classes through the descriptor registry, bypassing any
/// domain construction logic.
pub struct DefaultObjectConstructor {
  registry: Arc<DescriptorRegistry>,
}

impl DefaultObjectConstructor {
  /// Creates a constructor over the given registry snapshot.
  #[must_use]
  pub fn new(registry: Arc<DescriptorRegistry>) -> Self {
    Self { registry }
  }
}

impl ObjectConstructor for DefaultObjectConstructor {
  fn construct(&self, metadata: &ClassMetadata) -> Result<Box<dyn Reflective>, EngineError> {
    self
      .registry
      .instantiate(metadata.class_name())
      .ok_or_else(|| EngineError::NotConstructible { class: metadata.class_name().into() })
  }
}
