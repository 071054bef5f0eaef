//! Subscriber seam.

use super::{event_subscription::EventSubscription, object_event::ObjectEvent};
use crate::error::EngineError;

/// Receives lifecycle events during traversal.
pub trait EventSubscriber: Send + Sync {
  /// Returns the lifecycle interests of this subscriber.
  fn subscriptions(&self) -> Vec<EventSubscription>;

  /// Handles one lifecycle event, optionally mutating the in-flight value.
  ///
  /// # Errors
  ///
  /// An [`EngineError`] aborts the current serialize/deserialize call.
  fn on_event(&self, event: &mut ObjectEvent<'_>) -> Result<(), EngineError>;
}
