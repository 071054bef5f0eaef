//! Re-entry surface handed to handlers.

use super::nested_navigate::NestedNavigate;
use crate::{
  context::TraversalContext, error::EngineError, graph_value::GraphValue, handler::Direction, typing::TypeHint,
};

/// Navigation surface a handler sees while processing one node.
///
/// Carries the per-call context and the hint the navigator had for the node,
/// and lets the handler push child values back through the engine.
pub struct NavigationScope<'a> {
  navigator:    &'a dyn NestedNavigate,
  context:      &'a mut TraversalContext,
  current_hint: Option<&'a TypeHint>,
}

impl<'a> NavigationScope<'a> {
  pub(crate) fn new(
    navigator: &'a dyn NestedNavigate,
    context: &'a mut TraversalContext,
    current_hint: Option<&'a TypeHint>,
  ) -> Self {
    Self { navigator, context, current_hint }
  }

  /// Returns the traversal direction of the call.
  #[must_use]
  pub fn direction(&self) -> Direction {
    self.context.direction()
  }

  /// Returns the wire format of the call.
  #[must_use]
  pub fn format(&self) -> &str {
    self.context.format()
  }

  /// Returns the type hint the navigator had for the current node.
  #[must_use]
  pub const fn current_hint(&self) -> Option<&'a TypeHint> {
    self.current_hint
  }

  /// Navigates a child value through the engine.
  ///
  /// # Errors
  ///
  /// Propagates any traversal failure for the child value.
  pub fn navigate(&mut self, value: GraphValue, hint: Option<&TypeHint>) -> Result<GraphValue, EngineError> {
    self.navigator.navigate_nested(self.context, value, hint)
  }

  /// Returns the per-call context.
  #[must_use]
  pub fn context(&self) -> &TraversalContext {
    self.context
  }

  /// Returns the per-call context for mutation.
  pub fn context_mut(&mut self) -> &mut TraversalContext {
    self.context
  }
}
