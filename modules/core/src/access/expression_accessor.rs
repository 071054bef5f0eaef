//! Expression-aware accessor decorator.


use std::sync::Arc;

use super::{expression_evaluator::ExpressionEvaluator, property_accessor::PropertyAccessor};
use crate::{error::EngineError, graph_value::GraphValue, metadata::PropertyMetadata, reflective::Reflective};

/// Routes expression-backed properties through an evaluator and everything
/// else through the wrapped accessor.
///
/// Expression properties are read-only; writes always go to the fallback.
pub struct ExpressionAccessor {
  evaluator: Arc<dyn ExpressionEvaluator>,
  fallback:  Arc<dyn PropertyAccessor>,
}

impl ExpressionAccessor {
  /// Creates a decorator over `fallback` consulting `evaluator`.
  #[must_use]
  pub fn new(evaluator: Arc<dyn ExpressionEvaluator>, fallback: Arc<dyn PropertyAccessor>) -> Self {
    Self { evaluator, fallback }
  }
}

impl PropertyAccessor for ExpressionAccessor {
  fn read(&self, object: &dyn Reflective, property: &PropertyMetadata) -> Result<GraphValue, EngineError> {
    match property.expression() {
      | Some(expression) => self.evaluator.evaluate(expression, object),
      | None => self.fallback.read(object, property),
    }
  }

  fn write(
    &self,
    object: &mut dyn Reflective,
    property: &PropertyMetadata,
    value: GraphValue,
  ) -> Result<(), EngineError> {
    self.fallback.write(object, property, value)
  }
}
