//! Driver adapter over a descriptor reader.

use std::sync::Arc;

use super::{class_metadata::ClassMetadata, descriptor_reader::DescriptorReader, metadata_driver::MetadataDriver};
use crate::error::EngineError;

/// Exposes a [`DescriptorReader`] as a metadata driver.
pub struct ReaderMetadataDriver {
  reader: Arc<dyn DescriptorReader>,
}

impl ReaderMetadataDriver {
  /// Creates a driver delegating to the given reader.
  #[must_use]
  pub fn new(reader: Arc<dyn DescriptorReader>) -> Self {
    Self { reader }
  }
}

impl MetadataDriver for ReaderMetadataDriver {
  fn load_metadata(&self, class_name: &str) -> Result<Option<ClassMetadata>, EngineError> {
    self.reader.read(class_name)
  }
}
