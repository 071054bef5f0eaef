//! Untyped map re-navigation.

use indexmap::IndexMap;

use crate::{
  error::EngineError,
  graph_value::GraphValue,
  handler::{Direction, HandlerSubscription, SubscribingHandler},
  navigator::NavigationScope,
  typing::TypeHint,
};

/// Navigates every value of a string-keyed map through the engine.
///
/// Covers generic untyped objects that surface as plain maps rather than
/// metadata-described classes.
#[derive(Default, Clone)]
pub struct PlainMapHandler;

impl PlainMapHandler {
  /// Creates a new handler instance.
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl SubscribingHandler for PlainMapHandler {
  fn subscriptions(&self) -> Vec<HandlerSubscription> {
    vec![
      HandlerSubscription::any_format(Direction::Serialization, "map"),
      HandlerSubscription::any_format(Direction::Deserialization, "map"),
    ]
  }

  fn handle(&self, scope: &mut NavigationScope<'_>, value: GraphValue) -> Result<GraphValue, EngineError> {
    let value_hint = scope.current_hint().map(TypeHint::element_hint);
    match value {
      | GraphValue::Null => Ok(GraphValue::Null),
      | GraphValue::Map(entries) => {
        let mut navigated = IndexMap::with_capacity(entries.len());
        for (key, entry) in entries {
          navigated.insert(key, scope.navigate(entry, value_hint)?);
        }
        Ok(GraphValue::Map(navigated))
      },
      | other => Err(EngineError::UnexpectedValue { expected: "a map".into(), found: other.kind_name().into() }),
    }
  }
}
