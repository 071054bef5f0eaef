//! Nested navigation seam.

use crate::{context::TraversalContext, error::EngineError, graph_value::GraphValue, typing::TypeHint};

/// Re-enters navigation for a child node.
///
/// Implemented by both directional navigators so handlers can delegate
/// nested values back to the engine without knowing the direction.
pub trait NestedNavigate {
  /// Navigates one nested value.
  ///
  /// # Errors
  ///
  /// Propagates any traversal failure for the nested value.
  fn navigate_nested(
    &self,
    context: &mut TraversalContext,
    value: GraphValue,
    hint: Option<&TypeHint>,
  ) -> Result<GraphValue, EngineError>;
}
