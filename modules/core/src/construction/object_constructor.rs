//! Construction strategy seam.

use crate::{error::EngineError, metadata::ClassMetadata, reflective::Reflective};

/// Produces empty instances for the deserialization navigator to populate.
pub trait ObjectConstructor: Send + Sync {
  /// Constructs an instance of the class described by `metadata`.
  ///
  /// # Errors
  ///
  /// Returns [`EngineError::NotConstructible`] when no instantiation path
  /// exists for the class.
  fn construct(&self, metadata: &ClassMetadata) -> Result<Box<dyn Reflective>, EngineError>;
}
