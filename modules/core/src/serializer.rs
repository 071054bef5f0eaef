//! Immutable engine facade produced by the builder.

#[cfg(test)]
mod tests;

use std::sync::Arc;

use hashbrown::HashMap;

use crate::{
  context::{ContextFactory, TraversalContext},
  error::EngineError,
  graph_value::GraphValue,
  handler::Direction,
  metadata::{Describe, MetadataFactory},
  navigator::{DeserializationNavigatorFactory, SerializationNavigatorFactory},
  reflective::{ObjectRef, Reflective},
  typing::TypeParser,
  visitor::{drive, DeserializationVisitorFactory, SerializationVisitorFactory},
};

/// Frozen serialization engine exposing the two directional pipelines.
///
/// Built once by [`SerializerBuilder`](crate::builder::SerializerBuilder)
/// and safe to share across threads: every call receives a fresh context
/// from the context factory and a fresh navigator from the navigator
/// factory, and the registries frozen inside the engine are read-only.
pub struct Serializer {
  metadata_factory:                Arc<MetadataFactory>,
  serialization_navigators:        SerializationNavigatorFactory,
  deserialization_navigators:      DeserializationNavigatorFactory,
  serialization_visitors:          HashMap<String, SerializationVisitorFactory>,
  deserialization_visitors:        HashMap<String, DeserializationVisitorFactory>,
  serialization_context_factory:   Arc<dyn ContextFactory>,
  deserialization_context_factory: Arc<dyn ContextFactory>,
  type_parser:                     Arc<dyn TypeParser>,
}

impl Serializer {
  #[allow(clippy::too_many_arguments)]
  pub(crate) fn from_parts(
    metadata_factory: Arc<MetadataFactory>,
    serialization_navigators: SerializationNavigatorFactory,
    deserialization_navigators: DeserializationNavigatorFactory,
    serialization_visitors: HashMap<String, SerializationVisitorFactory>,
    deserialization_visitors: HashMap<String, DeserializationVisitorFactory>,
    serialization_context_factory: Arc<dyn ContextFactory>,
    deserialization_context_factory: Arc<dyn ContextFactory>,
    type_parser: Arc<dyn TypeParser>,
  ) -> Self {
    Self {
      metadata_factory,
      serialization_navigators,
      deserialization_navigators,
      serialization_visitors,
      deserialization_visitors,
      serialization_context_factory,
      deserialization_context_factory,
      type_parser,
    }
  }

  /// Serializes an object to the named format.
  ///
  /// # Errors
  ///
  /// Returns an [`EngineError`] for unknown formats or traversal failures.
  pub fn serialize(&self, object: ObjectRef, format: &str) -> Result<String, EngineError> {
    let context = self.serialization_context_factory.create_context();
    self.serialize_with_context(object, format, context)
  }

  /// Serializes an object with a caller-supplied context.
  ///
  /// # Errors
  ///
  /// Returns an [`EngineError`] for unknown formats or traversal failures.
  pub fn serialize_with_context(
    &self,
    object: ObjectRef,
    format: &str,
    context: TraversalContext,
  ) -> Result<String, EngineError> {
    self.serialize_value_with_context(GraphValue::Object(object), format, context)
  }

  /// Serializes an arbitrary value to the named format.
  ///
  /// # Errors
  ///
  /// Returns an [`EngineError`] for unknown formats or traversal failures.
  pub fn serialize_value(&self, value: GraphValue, format: &str) -> Result<String, EngineError> {
    let context = self.serialization_context_factory.create_context();
    self.serialize_value_with_context(value, format, context)
  }

  /// Serializes an arbitrary value with a caller-supplied context.
  ///
  /// # Errors
  ///
  /// Returns an [`EngineError`] for unknown formats or traversal failures.
  pub fn serialize_value_with_context(
    &self,
    value: GraphValue,
    format: &str,
    mut context: TraversalContext,
  ) -> Result<String, EngineError> {
    let factory = self.serialization_visitors.get(format).ok_or_else(|| EngineError::UnsupportedFormat {
      format:    format.into(),
      direction: Direction::Serialization,
    })?;
    context.initialize(Direction::Serialization, format);
    let navigator = self.serialization_navigators.create(format);
    let wire = navigator.navigate_root(value, &mut context)?;
    let mut visitor = factory();
    drive(visitor.as_mut(), &wire)?;
    visitor.into_output()
  }

  /// Deserializes wire text into a value of the named target type.
  ///
  /// # Errors
  ///
  /// Returns an [`EngineError`] for unknown formats, malformed input, or
  /// traversal failures.
  pub fn deserialize(&self, input: &str, target_type: &str, format: &str) -> Result<GraphValue, EngineError> {
    let context = self.deserialization_context_factory.create_context();
    self.deserialize_with_context(input, target_type, format, context)
  }

  /// Deserializes wire text with a caller-supplied context.
  ///
  /// # Errors
  ///
  /// Returns an [`EngineError`] for unknown formats, malformed input, or
  /// traversal failures.
  pub fn deserialize_with_context(
    &self,
    input: &str,
    target_type: &str,
    format: &str,
    mut context: TraversalContext,
  ) -> Result<GraphValue, EngineError> {
    let hint = self.type_parser.parse(target_type)?;
    let factory = self.deserialization_visitors.get(format).ok_or_else(|| EngineError::UnsupportedFormat {
      format:    format.into(),
      direction: Direction::Deserialization,
    })?;
    let wire = factory().parse(input)?;
    context.initialize(Direction::Deserialization, format);
    let navigator = self.deserialization_navigators.create(format);
    navigator.navigate_root(wire, &hint, &mut context)
  }

  /// Deserializes wire text into an object reference.
  ///
  /// # Errors
  ///
  /// Returns [`EngineError::UnexpectedValue`] when the target type does not
  /// produce an object, plus any failure from
  /// [`deserialize`](Self::deserialize).
  pub fn deserialize_object(&self, input: &str, target_type: &str, format: &str) -> Result<ObjectRef, EngineError> {
    let value = self.deserialize(input, target_type, format)?;
    let found = value.kind_name();
    value
      .into_object()
      .ok_or_else(|| EngineError::UnexpectedValue { expected: "an object value".into(), found: found.into() })
  }

  /// Deserializes wire text straight into a concrete described type.
  ///
  /// # Errors
  ///
  /// Returns [`EngineError::UnexpectedValue`] when the document does not
  /// decode to an instance of `T`, plus any failure from
  /// [`deserialize`](Self::deserialize).
  pub fn deserialize_as<T>(&self, input: &str, format: &str) -> Result<T, EngineError>
  where
    T: Describe + Reflective + Clone, {
    let value = self.deserialize(input, <T as Describe>::class_name(), format)?;
    let found = value.kind_name();
    value.downcast_object::<T>().ok_or_else(|| EngineError::UnexpectedValue {
      expected: format!("an instance of {}", <T as Describe>::class_name()),
      found:    found.into(),
    })
  }

  /// Returns the resolved metadata factory.
  #[must_use]
  pub fn metadata_factory(&self) -> &Arc<MetadataFactory> {
    &self.metadata_factory
  }
}
