//! Metadata driver seam.

use super::class_metadata::ClassMetadata;
use crate::error::EngineError;

/// Loads raw class metadata from one configured source.
pub trait MetadataDriver: Send + Sync {
  /// Loads metadata for the named class.
  ///
  /// Returns `Ok(None)` when this driver has no declaration for the class.
  ///
  /// # Errors
  ///
  /// Returns [`EngineError::MetadataFailure`] when the source exists but
  /// cannot be read or decoded.
  fn load_metadata(&self, class_name: &str) -> Result<Option<ClassMetadata>, EngineError>;
}
