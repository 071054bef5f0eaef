//! Ordered first-match driver composition.

use std::sync::Arc;

use super::{class_metadata::ClassMetadata, metadata_driver::MetadataDriver};
use crate::error::EngineError;

/// Queries drivers in order and returns the first declaration found.
pub struct DriverChain {
  drivers: Vec<Arc<dyn MetadataDriver>>,
}

impl DriverChain {
  /// Creates a chain over the given drivers, earliest first.
  #[must_use]
  pub fn new(drivers: Vec<Arc<dyn MetadataDriver>>) -> Self {
    Self { drivers }
  }
}

impl MetadataDriver for DriverChain {
  fn load_metadata(&self, class_name: &str) -> Result<Option<ClassMetadata>, EngineError> {
    for driver in &self.drivers {
      if let Some(metadata) = driver.load_metadata(class_name)? {
        return Ok(Some(metadata));
      }
    }
    Ok(None)
  }
}
