//! Driver decorator baking wire names into metadata.

use std::sync::Arc;

use super::{class_metadata::ClassMetadata, metadata_driver::MetadataDriver};
use crate::{error::EngineError, naming::PropertyNamingStrategy};

/// Runs the naming strategy over every loaded property so navigators see
/// final wire names.
pub struct ResolvedNamingDriver {
  inner:    Arc<dyn MetadataDriver>,
  strategy: Arc<dyn PropertyNamingStrategy>,
}

impl ResolvedNamingDriver {
  /// Creates a naming decorator over the given driver.
  #[must_use]
  pub fn new(inner: Arc<dyn MetadataDriver>, strategy: Arc<dyn PropertyNamingStrategy>) -> Self {
    Self { inner, strategy }
  }
}

impl MetadataDriver for ResolvedNamingDriver {
  fn load_metadata(&self, class_name: &str) -> Result<Option<ClassMetadata>, EngineError> {
    let Some(loaded) = self.inner.load_metadata(class_name)? else {
      return Ok(None);
    };
    let mut resolved = ClassMetadata::new(loaded.class_name());
    if let Some(parent) = loaded.extends() {
      resolved = resolved.with_extends(parent);
    }
    if loaded.is_interface() {
      resolved = resolved.as_interface();
    }
    for property in loaded.properties() {
      let mut property = property.clone();
      property.set_resolved_name(self.strategy.translate(&property));
      resolved = resolved.with_property(property);
    }
    Ok(Some(resolved))
  }
}
