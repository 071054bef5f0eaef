//! Built-in subscriber forwarding lifecycle events to `tracing`.

use super::{
  event_kind::EventKind, event_subscriber::EventSubscriber, event_subscription::EventSubscription,
  object_event::ObjectEvent,
};
use crate::error::EngineError;

/// Emits a `tracing` event at every traversal lifecycle point.
///
/// This is the default event subscriber injected by the builder when no
/// custom listeners were configured.
#[derive(Default, Clone)]
pub struct TraversalLogSubscriber;

impl TraversalLogSubscriber {
  /// Target name used in emitted events.
  pub const DEFAULT_TARGET: &'static str = "vellum::traversal";

  /// Creates a new subscriber instance.
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl EventSubscriber for TraversalLogSubscriber {
  fn subscriptions(&self) -> Vec<EventSubscription> {
    vec![
      EventSubscription::new(EventKind::PreSerialize),
      EventSubscription::new(EventKind::PostSerialize),
      EventSubscription::new(EventKind::PreDeserialize),
      EventSubscription::new(EventKind::PostDeserialize),
    ]
  }

  fn on_event(&self, event: &mut ObjectEvent<'_>) -> Result<(), EngineError> {
    tracing::trace!(
      target: TraversalLogSubscriber::DEFAULT_TARGET,
      lifecycle = event.kind().as_str(),
      r#type = event.type_name(),
      format = event.format(),
      "traversal lifecycle event"
    );
    Ok(())
  }
}
