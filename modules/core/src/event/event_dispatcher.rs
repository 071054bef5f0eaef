//! Registration-order fanout dispatcher.

#[cfg(test)]
mod tests;

use std::sync::Arc;

use super::{
  event_kind::EventKind, event_subscriber::EventSubscriber, event_subscription::EventSubscription,
  object_event::ObjectEvent,
};
use crate::error::EngineError;

/// Fans lifecycle events out to subscribers in registration order.
///
/// Cloning the dispatcher snapshots the subscriber list; an engine built
/// from a clone never observes later mutation of the original.
#[derive(Default, Clone)]
pub struct EventDispatcher {
  subscribers: Vec<(EventSubscription, Arc<dyn EventSubscriber>)>,
}

impl EventDispatcher {
  /// Creates an empty dispatcher.
  #[must_use]
  pub fn new() -> Self {
    Self { subscribers: Vec::new() }
  }

  /// Registers a subscriber under every interest it declares.
  pub fn add_subscriber(&mut self, subscriber: Arc<dyn EventSubscriber>) {
    for subscription in subscriber.subscriptions() {
      self.subscribers.push((subscription, subscriber.clone()));
    }
  }

  /// Dispatches one event to every matching subscriber, in order.
  ///
  /// # Errors
  ///
  /// Propagates the first subscriber failure; remaining subscribers are not
  /// invoked.
  pub fn dispatch(&self, event: &mut ObjectEvent<'_>) -> Result<(), EngineError> {
    for (subscription, subscriber) in &self.subscribers {
      if subscription.accepts(event.kind(), event.type_name()) {
        subscriber.on_event(event)?;
      }
    }
    Ok(())
  }

  /// Returns `true` when any subscriber listens at the given point.
  #[must_use]
  pub fn listens_for(&self, kind: EventKind) -> bool {
    self.subscribers.iter().any(|(subscription, _)| subscription.kind() == kind)
  }

  /// Returns the number of registered interests.
  #[must_use]
  pub fn len(&self) -> usize {
    self.subscribers.len()
  }

  /// Returns `true` when no subscriber is registered.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.subscribers.is_empty()
  }
}
