//! Closure-backed factory adapter.

use std::sync::Arc;

use super::{context_factory::ContextFactory, traversal_context::TraversalContext};

/// Adapts a plain callable into a [`ContextFactory`].
pub struct CallbackContextFactory {
  callback: Arc<dyn Fn() -> TraversalContext + Send + Sync>,
}

impl CallbackContextFactory {
  /// Creates a factory calling `callback` once per call.
  #[must_use]
  pub fn new(callback: Arc<dyn Fn() -> TraversalContext + Send + Sync>) -> Self {
    Self { callback }
  }
}

impl ContextFactory for CallbackContextFactory {
  fn create_context(&self) -> TraversalContext {
    (self.callback)()
  }
}
