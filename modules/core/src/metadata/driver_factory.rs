//! Driver construction seam.

use std::{path::PathBuf, sync::Arc};

use super::{descriptor_reader::DescriptorReader, metadata_driver::MetadataDriver};

/// Builds the metadata driver from the configured sources.
///
/// Invoked once per [`build()`](crate::builder::SerializerBuilder::build)
/// with the validated namespace-prefix map and the (possibly cache-wrapped)
/// descriptor reader.
pub trait DriverFactory: Send + Sync {
  /// Creates the driver consulted by the metadata factory.
  fn create_driver(&self, metadata_dirs: Vec<(String, PathBuf)>, reader: Arc<dyn DescriptorReader>)
  -> Arc<dyn MetadataDriver>;
}
