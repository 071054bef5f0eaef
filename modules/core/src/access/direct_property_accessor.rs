//! Direct named-property access.

use super::property_accessor::PropertyAccessor;
use crate::{error::EngineError, graph_value::GraphValue, metadata::PropertyMetadata, reflective::Reflective};

/// Default accessor going straight through [`Reflective::property`] and
/// [`Reflective::set_property`].
#[derive(Default, Clone)]
pub struct DirectPropertyAccessor;

impl DirectPropertyAccessor {
  /// Creates a new accessor instance.
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl PropertyAccessor for DirectPropertyAccessor {
  fn read(&self, object: &dyn Reflective, property: &PropertyMetadata) -> Result<GraphValue, EngineError> {
    object.property(property.name()).ok_or_else(|| EngineError::UnknownProperty {
      class:    object.class_name().into(),
      property: property.name().into(),
    })
  }

  fn write(
    &self,
    object: &mut dyn Reflective,
    property: &PropertyMetadata,
    value: GraphValue,
  ) -> Result<(), EngineError> {
    object.set_property(property.name(), value)
  }
}
