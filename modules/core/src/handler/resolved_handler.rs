//! Resolved dispatch target.

use std::sync::Arc;

use super::{handler_registry::HandlerFn, subscribing_handler::SubscribingHandler};
use crate::{error::EngineError, graph_value::GraphValue, navigator::NavigationScope};

/// Outcome of a handler lookup, ready to invoke.
#[derive(Clone)]
pub enum ResolvedHandler {
  /// An exact-key registration.
  Exact(HandlerFn),
  /// A subscribing registration matched by ancestry.
  Subscribing(Arc<dyn SubscribingHandler>),
}

impl ResolvedHandler {
  /// Invokes the resolved handler on one node.
  ///
  /// # Errors
  ///
  /// Propagates the handler's [`EngineError`].
  pub fn invoke(&self, scope: &mut NavigationScope<'_>, value: GraphValue) -> Result<GraphValue, EngineError> {
    match self {
      | Self::Exact(handler) => handler(scope, value),
      | Self::Subscribing(handler) => handler.handle(scope, value),
    }
  }
}
