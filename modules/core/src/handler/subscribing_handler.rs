//! Hierarchy-aware handler seam.

use super::handler_subscription::HandlerSubscription;
use crate::{error::EngineError, graph_value::GraphValue, navigator::NavigationScope};

/// Handler that declares its interests and matches types by ancestry.
///
/// Used by the built-in handlers (date/time values, array-like collections,
/// untyped maps) and by any custom handler that wants to cover a class
/// together with everything derived from it.
pub trait SubscribingHandler: Send + Sync {
  /// Returns the (direction, type, format) triples this handler covers.
  fn subscriptions(&self) -> Vec<HandlerSubscription>;

  /// Processes one node, optionally re-entering navigation through `scope`.
  ///
  /// # Errors
  ///
  /// Returns an [`EngineError`] when the node cannot be processed; the error
  /// aborts the current call only.
  fn handle(&self, scope: &mut NavigationScope<'_>, value: GraphValue) -> Result<GraphValue, EngineError>;
}
