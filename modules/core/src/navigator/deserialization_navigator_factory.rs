//! Per-call factory for deserialization navigators.

use std::sync::Arc;

use super::deserialization_graph_navigator::DeserializationGraphNavigator;
use crate::{
  access::PropertyAccessor, construction::ObjectConstructor, event::EventDispatcher, handler::HandlerRegistry,
  metadata::MetadataFactory,
};

/// Binds the frozen dependencies of the deserialize pipeline, including the
/// object constructor, and produces one navigator per call.
pub struct DeserializationNavigatorFactory {
  metadata_factory: Arc<MetadataFactory>,
  handlers:         Arc<HandlerRegistry>,
  accessor:         Arc<dyn PropertyAccessor>,
  dispatcher:       Arc<EventDispatcher>,
  constructor:      Arc<dyn ObjectConstructor>,
}

impl DeserializationNavigatorFactory {
  /// Creates a factory over the resolved dependencies.
  #[must_use]
  pub fn new(
    metadata_factory: Arc<MetadataFactory>,
    handlers: Arc<HandlerRegistry>,
    accessor: Arc<dyn PropertyAccessor>,
    dispatcher: Arc<EventDispatcher>,
    constructor: Arc<dyn ObjectConstructor>,
  ) -> Self {
    Self { metadata_factory, handlers, accessor, dispatcher, constructor }
  }

  /// Produces a navigator for one deserialize call.
  #[must_use]
  pub fn create(&self, format: &str) -> DeserializationGraphNavigator {
    DeserializationGraphNavigator::new(
      self.metadata_factory.clone(),
      self.handlers.clone(),
      self.accessor.clone(),
      self.dispatcher.clone(),
      self.constructor.clone(),
      format.into(),
    )
  }
}
