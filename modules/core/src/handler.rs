//! Type-specific handler registrations and dispatch.

/// Built-in handler set injected when no custom handlers were configured.
pub mod builtin;
/// Traversal direction marker.
mod direction;
/// Exact registration key.
mod handler_key;
/// Registry with exact and subscribing registrations.
mod handler_registry;
/// Declared interest of a subscribing handler.
mod handler_subscription;
/// Resolved dispatch target.
mod resolved_handler;
/// Hierarchy-aware handler seam.
mod subscribing_handler;

pub use direction::Direction;
pub use handler_key::HandlerKey;
pub use handler_registry::{HandlerFn, HandlerRegistry};
pub use handler_subscription::HandlerSubscription;
pub use resolved_handler::ResolvedHandler;
pub use subscribing_handler::SubscribingHandler;
