//! Factory seam.

use super::traversal_context::TraversalContext;

/// Produces the per-call context for one pipeline direction.
pub trait ContextFactory: Send + Sync {
  /// Creates a fresh context for one call.
  fn create_context(&self) -> TraversalContext;
}
