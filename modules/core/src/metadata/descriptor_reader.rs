//! Descriptor reading seam.

use super::class_metadata::ClassMetadata;
use crate::error::EngineError;

/// Produces raw (unmerged) class metadata from a descriptor source.
pub trait DescriptorReader: Send + Sync {
  /// Reads the descriptor for the named class.
  ///
  /// Returns `Ok(None)` when the source knows nothing about the class.
  ///
  /// # Errors
  ///
  /// Returns [`EngineError::MetadataFailure`] when the source itself fails.
  fn read(&self, class_name: &str) -> Result<Option<ClassMetadata>, EngineError>;
}
