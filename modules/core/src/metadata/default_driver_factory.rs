//! Default driver factory.

use std::{path::PathBuf, sync::Arc};

use super::{
  descriptor_reader::DescriptorReader, driver_chain::DriverChain, driver_factory::DriverFactory,
  file_metadata_driver::FileMetadataDriver, metadata_driver::MetadataDriver,
  reader_metadata_driver::ReaderMetadataDriver, resolved_naming_driver::ResolvedNamingDriver,
};
use crate::{naming::PropertyNamingStrategy, typing::TypeParser};

/// Chains metadata files over the descriptor reader and bakes in wire names.
///
/// File declarations win over descriptors for the same class, which lets a
/// deployment override compiled-in metadata without touching code.
pub struct DefaultDriverFactory {
  naming:      Arc<dyn PropertyNamingStrategy>,
  type_parser: Arc<dyn TypeParser>,
}

impl DefaultDriverFactory {
  /// Creates the factory with the resolved naming strategy and type parser.
  #[must_use]
  pub fn new(naming: Arc<dyn PropertyNamingStrategy>, type_parser: Arc<dyn TypeParser>) -> Self {
    Self { naming, type_parser }
  }
}

impl DriverFactory for DefaultDriverFactory {
  fn create_driver(
    &self,
    metadata_dirs: Vec<(String, PathBuf)>,
    reader: Arc<dyn DescriptorReader>,
  ) -> Arc<dyn MetadataDriver> {
    let chain = DriverChain::new(vec![
      Arc::new(FileMetadataDriver::new(metadata_dirs, self.type_parser.clone())) as Arc<dyn MetadataDriver>,
      Arc::new(ReaderMetadataDriver::new(reader)),
    ]);
    Arc::new(ResolvedNamingDriver::new(Arc::new(chain), self.naming.clone()))
  }
}
