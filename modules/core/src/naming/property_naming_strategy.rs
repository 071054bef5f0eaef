//! Naming strategy seam.

use crate::metadata::PropertyMetadata;

/// Maps a declared property to the name it carries on the wire.
pub trait PropertyNamingStrategy: Send + Sync {
  /// Returns the wire name for the given property.
  fn translate(&self, property: &PropertyMetadata) -> String;
}
