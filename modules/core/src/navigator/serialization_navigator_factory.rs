//! Per-call factory for serialization navigators.

use std::sync::Arc;

use super::serialization_graph_navigator::SerializationGraphNavigator;
use crate::{
  access::PropertyAccessor, event::EventDispatcher, handler::HandlerRegistry, metadata::MetadataFactory,
};

/// Binds the frozen dependencies of the serialize pipeline and produces one
/// navigator per call.
pub struct SerializationNavigatorFactory {
  metadata_factory: Arc<MetadataFactory>,
  handlers:         Arc<HandlerRegistry>,
  accessor:         Arc<dyn PropertyAccessor>,
  dispatcher:       Arc<EventDispatcher>,
}

impl SerializationNavigatorFactory {
  /// Creates a factory over the resolved dependencies.
  #[must_use]
  pub fn new(
    metadata_factory: Arc<MetadataFactory>,
    handlers: Arc<HandlerRegistry>,
    accessor: Arc<dyn PropertyAccessor>,
    dispatcher: Arc<EventDispatcher>,
  ) -> Self {
    Self { metadata_factory, handlers, accessor, dispatcher }
  }

  /// Produces a navigator for one serialize call.
  #[must_use]
  pub fn create(&self, format: &str) -> SerializationGraphNavigator {
    SerializationGraphNavigator::new(
      self.metadata_factory.clone(),
      self.handlers.clone(),
      self.accessor.clone(),
      self.dispatcher.clone(),
      format.into(),
    )
  }
}
