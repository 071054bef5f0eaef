//! Registry with exact and subscribing registrations.


use std::sync::Arc;

use hashbrown::HashMap;

use super::{
  direction::Direction, handler_key::HandlerKey, handler_subscription::HandlerSubscription,
  resolved_handler::ResolvedHandler, subscribing_handler::SubscribingHandler,
};
use crate::{error::EngineError, graph_value::GraphValue, navigator::NavigationScope};

/// Callable registered for one exact (direction, type, format) key.
pub type HandlerFn = Arc<dyn Fn(&mut NavigationScope<'_>, GraphValue) -> Result<GraphValue, EngineError> + Send + Sync>;

/// Accumulates handler registrations until the builder freezes a snapshot.
///
/// Cloning the registry snapshots the registrations; an engine built from a
/// clone never observes later mutation of the original.
#[derive(Default, Clone)]
pub struct HandlerRegistry {
  exact:       HashMap<HandlerKey, HandlerFn>,
  subscribing: Vec<(HandlerSubscription, Arc<dyn SubscribingHandler>)>,
}

impl HandlerRegistry {
  /// Creates an empty registry.
  #[must_use]
  pub fn new() -> Self {
    Self { exact: HashMap::new(), subscribing: Vec::new() }
  }

  /// Registers a handler for one exact (direction, type, format) key.
  ///
  /// Re-registering the same key silently replaces the previous handler:
  /// the registry accumulates configuration until the builder freezes it,
  /// and the last configured value is the one that ships.
  pub fn register_handler(
    &mut self,
    direction: Direction,
    type_name: impl Into<String>,
    format: impl Into<String>,
    handler: HandlerFn,
  ) {
    self.exact.insert(HandlerKey::new(direction, type_name, format), handler);
  }

  /// Convenience wrapper accepting a plain closure.
  pub fn register_handler_fn<F>(
    &mut self,
    direction: Direction,
    type_name: impl Into<String>,
    format: impl Into<String>,
    handler: F,
  ) where
    F: Fn(&mut NavigationScope<'_>, GraphValue) -> Result<GraphValue, EngineError> + Send + Sync + 'static, {
    self.register_handler(direction, type_name, format, Arc::new(handler));
  }

  /// Registers a subscribing handler under every triple it declares.
  pub fn register_subscribing_handler(&mut self, handler: Arc<dyn SubscribingHandler>) {
    for subscription in handler.subscriptions() {
      self.subscribing.push((subscription, handler.clone()));
    }
  }

  /// Resolves the most specific handler for a call site.
  ///
  /// `ancestry` lists candidate type names, most derived first. An exact
  /// registration for the most derived type wins outright; otherwise the
  /// nearest ancestry entry with a subscribing match wins, and among
  /// subscribing matches for the same entry the latest registration wins.
  #[must_use]
  pub fn find(&self, direction: Direction, format: &str, ancestry: &[String]) -> Option<ResolvedHandler> {
    if let Some(most_derived) = ancestry.first()
      && let Some(handler) = self.exact.get(&HandlerKey::new(direction, most_derived.clone(), format))
    {
      return Some(ResolvedHandler::Exact(handler.clone()));
    }
    for type_name in ancestry {
      for (subscription, handler) in self.subscribing.iter().rev() {
        if subscription.accepts(direction, type_name, format) {
          return Some(ResolvedHandler::Subscribing(handler.clone()));
        }
      }
    }
    None
  }

  /// Returns the number of exact registrations.
  #[must_use]
  pub fn exact_len(&self) -> usize {
    self.exact.len()
  }

  /// Returns the number of subscribing registrations.
  #[must_use]
  pub fn subscribing_len(&self) -> usize {
    self.subscribing.len()
  }

  /// Returns `true` when nothing has been registered.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.exact.is_empty() && self.subscribing.is_empty()
  }
}
