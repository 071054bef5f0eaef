//! Tagged factory-or-callable configuration value.


use std::sync::Arc;

use super::{
  callback_context_factory::CallbackContextFactory, context_factory::ContextFactory,
  traversal_context::TraversalContext,
};

/// Accepts either a typed factory or a plain callable for a context slot.
///
/// The builder normalizes both shapes to a single [`ContextFactory`] at
/// configuration time; the engine never sees the distinction.
pub enum ContextFactoryValue {
  /// A typed factory object.
  Factory(Arc<dyn ContextFactory>),
  /// A plain callable producing contexts.
  Callback(Arc<dyn Fn() -> TraversalContext + Send + Sync>),
}

impl ContextFactoryValue {
  /// Wraps a typed factory.
  #[must_use]
  pub fn from_factory(factory: impl ContextFactory + 'static) -> Self {
    Self::Factory(Arc::new(factory))
  }

  /// Wraps a plain callable.
  #[must_use]
  pub fn from_callback<F>(callback: F) -> Self
  where
    F: Fn() -> TraversalContext + Send + Sync + 'static, {
    Self::Callback(Arc::new(callback))
  }

  /// Normalizes either shape into a factory.
  #[must_use]
  pub fn normalize(self) -> Arc<dyn ContextFactory> {
    match self {
      | Self::Factory(factory) => factory,
      | Self::Callback(callback) => Arc::new(CallbackContextFactory::new(callback)),
    }
  }
}

impl From<Arc<dyn ContextFactory>> for ContextFactoryValue {
  fn from(factory: Arc<dyn ContextFactory>) -> Self {
    Self::Factory(factory)
  }
}
