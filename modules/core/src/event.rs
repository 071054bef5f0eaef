//! Traversal lifecycle events.

/// Registration-order fanout dispatcher.
mod event_dispatcher;
/// Lifecycle event names.
mod event_kind;
/// Subscriber seam.
mod event_subscriber;
/// Declared interest of a subscriber.
mod event_subscription;
/// Mutable in-flight event payload.
mod object_event;
/// Built-in subscriber forwarding lifecycle events to `tracing`.
mod traversal_log_subscriber;

pub use event_dispatcher::EventDispatcher;
pub use event_kind::EventKind;
pub use event_subscriber::EventSubscriber;
pub use event_subscription::EventSubscription;
pub use object_event::ObjectEvent;
pub use traversal_log_subscriber::TraversalLogSubscriber;
