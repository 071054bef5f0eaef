//! JSON deserialization visitor.


use indexmap::IndexMap;
use serde_json::Value;

use super::deserialization_visitor::DeserializationVisitor;
use crate::{error::EngineError, graph_value::GraphValue};

/// Decodes JSON documents into the neutral value tree via `serde_json`.
#[derive(Default, Clone)]
pub struct JsonDeserializationVisitor;

impl JsonDeserializationVisitor {
  /// Creates a visitor instance.
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl DeserializationVisitor for JsonDeserializationVisitor {
  fn parse(&self, input: &str) -> Result<GraphValue, EngineError> {
    let document: Value = serde_json::from_str(input)
      .map_err(|error| EngineError::ParseFailure { format: "json".into(), detail: error.to_string() })?;
    Ok(from_json(document))
  }
}

fn from_json(value: Value) -> GraphValue {
  match value {
    | Value::Null => GraphValue::Null,
    | Value::Bool(value) => GraphValue::Bool(value),
    | Value::Number(number) => match number.as_i64() {
      | Some(value) => GraphValue::Int(value),
      | None => GraphValue::Float(number.as_f64().unwrap_or(f64::NAN)),
    },
    | Value::String(value) => GraphValue::Str(value),
    | Value::Array(elements) => GraphValue::Seq(elements.into_iter().map(from_json).collect()),
    | Value::Object(entries) => {
      let mut map = IndexMap::with_capacity(entries.len());
      for (key, entry) in entries {
        map.insert(key, from_json(entry));
      }
      GraphValue::Map(map)
    },
  }
}
