//! Array-like collection re-navigation.

use crate::{
  error::EngineError,
  graph_value::GraphValue,
  handler::{Direction, HandlerSubscription, SubscribingHandler},
  navigator::NavigationScope,
  typing::TypeHint,
};

/// Navigates every element of a sequence through the engine.
#[derive(Default, Clone)]
pub struct IterableHandler;

impl IterableHandler {
  /// Creates a new handler instance.
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl SubscribingHandler for IterableHandler {
  fn subscriptions(&self) -> Vec<HandlerSubscription> {
    vec![
      HandlerSubscription::any_format(Direction::Serialization, "collection"),
      HandlerSubscription::any_format(Direction::Deserialization, "collection"),
    ]
  }

  fn handle(&self, scope: &mut NavigationScope<'_>, value: GraphValue) -> Result<GraphValue, EngineError> {
    let element_hint = scope.current_hint().map(TypeHint::element_hint);
    match value {
      | GraphValue::Null => Ok(GraphValue::Null),
      | GraphValue::Seq(elements) => {
        let mut navigated = Vec::with_capacity(elements.len());
        for element in elements {
          navigated.push(scope.navigate(element, element_hint)?);
        }
        Ok(GraphValue::Seq(navigated))
      },
      | other => Err(EngineError::UnexpectedValue { expected: "a sequence".into(), found: other.kind_name().into() }),
    }
  }
}
