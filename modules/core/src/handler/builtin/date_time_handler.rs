//! RFC 3339 date/time conversion.


use chrono::{DateTime, Utc};

use crate::{
  error::EngineError,
  graph_value::GraphValue,
  handler::{Direction, HandlerSubscription, SubscribingHandler},
  navigator::NavigationScope,
};

/// Converts date/time scalars to RFC 3339 strings and back.
#[derive(Default, Clone)]
pub struct DateTimeHandler;

impl DateTimeHandler {
  /// Creates a new handler instance.
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl SubscribingHandler for DateTimeHandler {
  fn subscriptions(&self) -> Vec<HandlerSubscription> {
    vec![
      HandlerSubscription::any_format(Direction::Serialization, "datetime"),
      HandlerSubscription::any_format(Direction::Deserialization, "datetime"),
    ]
  }

  fn handle(&self, scope: &mut NavigationScope<'_>, value: GraphValue) -> Result<GraphValue, EngineError> {
    match (scope.direction(), value) {
      | (_, GraphValue::Null) => Ok(GraphValue::Null),
      | (Direction::Serialization, GraphValue::DateTime(instant)) => Ok(GraphValue::Str(instant.to_rfc3339())),
      | (Direction::Serialization, GraphValue::Str(text)) => Ok(GraphValue::Str(text)),
      | (Direction::Deserialization, GraphValue::DateTime(instant)) => Ok(GraphValue::DateTime(instant)),
      | (Direction::Deserialization, GraphValue::Str(text)) => DateTime::parse_from_rfc3339(&text)
        .map(|instant| GraphValue::DateTime(instant.with_timezone(&Utc)))
        .map_err(|error| EngineError::UnexpectedValue {
          expected: "an RFC 3339 timestamp".into(),
          found:    format!("{text:?} ({error})"),
        }),
      | (_, other) => {
        Err(EngineError::UnexpectedValue { expected: "a datetime value".into(), found: other.kind_name().into() })
      },
    }
  }
}
