//! Expression evaluation seam.

use crate::{error::EngineError, graph_value::GraphValue, reflective::Reflective};

/// Evaluates accessor expressions against a live instance.
///
/// The expression language itself is an external collaborator; the engine
/// only routes expressions declared in property metadata through whatever
/// evaluator the builder was given.
pub trait ExpressionEvaluator: Send + Sync {
  /// Evaluates `expression` against `object`.
  ///
  /// # Errors
  ///
  /// Returns [`EngineError::ExpressionFailure`] when evaluation fails.
  fn evaluate(&self, expression: &str, object: &dyn Reflective) -> Result<GraphValue, EngineError>;
}
