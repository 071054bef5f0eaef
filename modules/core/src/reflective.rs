//! Property-level access surface implemented by participating types.

use std::{any::Any, fmt::Debug, sync::Arc};

use crate::{error::EngineError, graph_value::GraphValue};

/// Shared reference to a type-erased reflective instance.
pub type ObjectRef = Arc<dyn Reflective>;

/// Exposes a type's stable class name and named-property access.
///
/// The host language has no runtime reflection, so types participating in
/// metadata-driven traversal implement this trait (usually mechanically) to
/// let accessor strategies read and write properties by name.
pub trait Reflective: Debug + Send + Sync + 'static {
  /// Returns the stable class name used for metadata and handler lookup.
  fn class_name(&self) -> &str;

  /// Reads a property value by its declared (not wire) name.
  ///
  /// Returns `None` when the instance does not expose the property.
  fn property(&self, name: &str) -> Option<GraphValue>;

  /// Writes a property value by its declared name.
  ///
  /// # Errors
  ///
  /// Returns [`EngineError::UnknownProperty`] when the instance does not
  /// expose the property, or [`EngineError::UnexpectedValue`] when the value
  /// shape does not fit the field.
  fn set_property(&mut self, name: &str, value: GraphValue) -> Result<(), EngineError>;

  /// Provides access to the dynamic type used for downcasting.
  fn as_any(&self) -> &dyn Any;

  /// Mutable counterpart of [`Reflective::as_any`].
  fn as_any_mut(&mut self) -> &mut dyn Any;
}
