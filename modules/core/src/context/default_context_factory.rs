//! Identity factory.

use super::{context_factory::ContextFactory, traversal_context::TraversalContext};

/// Produces plain fresh contexts; the default for both pipeline directions.
#[derive(Default, Clone)]
pub struct DefaultContextFactory;

impl DefaultContextFactory {
  /// Creates a new factory instance.
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl ContextFactory for DefaultContextFactory {
  fn create_context(&self) -> TraversalContext {
    TraversalContext::new()
  }
}
