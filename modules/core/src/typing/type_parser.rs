//! Type parsing strategy seam.

use super::type_hint::TypeHint;
use crate::error::EngineError;

/// Parses textual type references into [`TypeHint`] values.
pub trait TypeParser: Send + Sync {
  /// Parses the given type expression.
  ///
  /// # Errors
  ///
  /// Returns [`EngineError::InvalidTypeExpression`] when the expression does
  /// not match the supported grammar.
  fn parse(&self, expression: &str) -> Result<TypeHint, EngineError>;
}
