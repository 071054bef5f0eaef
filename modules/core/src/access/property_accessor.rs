//! Accessor strategy seam.

use crate::{error::EngineError, graph_value::GraphValue, metadata::PropertyMetadata, reflective::Reflective};

/// Reads and writes property values on reflective instances.
pub trait PropertyAccessor: Send + Sync {
  /// Reads the property described by `property` from `object`.
  ///
  /// # Errors
  ///
  /// Returns [`EngineError::UnknownProperty`] when the instance does not
  /// expose the property, or an evaluator error for expression-backed reads.
  fn read(&self, object: &dyn Reflective, property: &PropertyMetadata) -> Result<GraphValue, EngineError>;

  /// Writes `value` into the property described by `property` on `object`.
  ///
  /// # Errors
  ///
  /// Returns [`EngineError::UnknownProperty`] or
  /// [`EngineError::UnexpectedValue`] when the write is rejected.
  fn write(&self, object: &mut dyn Reflective, property: &PropertyMetadata, value: GraphValue)
  -> Result<(), EngineError>;
}
