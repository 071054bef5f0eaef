//! JSON serialization visitor.

#[cfg(test)]
mod tests;

use serde_json::{Map, Number, Value};

use super::serialization_visitor::SerializationVisitor;
use crate::error::EngineError;

/// Renders the event stream as a JSON document via `serde_json`.
#[derive(Default)]
pub struct JsonSerializationVisitor {
  root:        Option<Value>,
  stack:       Vec<Frame>,
  pending_key: Option<String>,
}

impl JsonSerializationVisitor {
  /// Creates a visitor for one document.
  #[must_use]
  pub fn new() -> Self {
    Self { root: None, stack: Vec::new(), pending_key: None }
  }

  fn emit(&mut self, value: Value) -> Result<(), EngineError> {
    let pending_key = self.pending_key.take();
    match self.stack.last_mut() {
      | Some(Frame::Object(entries)) => {
        let key = pending_key
          .ok_or_else(|| EngineError::VisitFailure { detail: "object member emitted without a property name".into() })?;
        entries.insert(key, value);
        Ok(())
      },
      | Some(Frame::Seq(elements)) => {
        elements.push(value);
        Ok(())
      },
      | None => {
        if self.root.is_some() {
          return Err(EngineError::VisitFailure { detail: "multiple root values".into() });
        }
        self.root = Some(value);
        Ok(())
      },
    }
  }
}

impl SerializationVisitor for JsonSerializationVisitor {
  fn visit_null(&mut self) -> Result<(), EngineError> {
    self.emit(Value::Null)
  }

  fn visit_bool(&mut self, value: bool) -> Result<(), EngineError> {
    self.emit(Value::Bool(value))
  }

  fn visit_int(&mut self, value: i64) -> Result<(), EngineError> {
    self.emit(Value::Number(Number::from(value)))
  }

  fn visit_float(&mut self, value: f64) -> Result<(), EngineError> {
    let number = Number::from_f64(value)
      .ok_or_else(|| EngineError::VisitFailure { detail: format!("non-finite float {value} is not representable") })?;
    self.emit(Value::Number(number))
  }

  fn visit_str(&mut self, value: &str) -> Result<(), EngineError> {
    self.emit(Value::String(value.into()))
  }

  fn begin_object(&mut self) -> Result<(), EngineError> {
    self.stack.push(Frame::Object(Map::new()));
    Ok(())
  }

  fn property_name(&mut self, name: &str) -> Result<(), EngineError> {
    if !matches!(self.stack.last(), Some(Frame::Object(_))) {
      return Err(EngineError::VisitFailure { detail: "property name outside of an object".into() });
    }
    if self.pending_key.replace(name.into()).is_some() {
      return Err(EngineError::VisitFailure { detail: "property name followed by another name".into() });
    }
    Ok(())
  }

  fn end_object(&mut self) -> Result<(), EngineError> {
    match self.stack.pop() {
      | Some(Frame::Object(entries)) => self.emit(Value::Object(entries)),
      | _ => Err(EngineError::VisitFailure { detail: "end_object without a matching begin_object".into() }),
    }
  }

  fn begin_seq(&mut self) -> Result<(), EngineError> {
    self.stack.push(Frame::Seq(Vec::new()));
    Ok(())
  }

  fn end_seq(&mut self) -> Result<(), EngineError> {
    match self.stack.pop() {
      | Some(Frame::Seq(elements)) => self.emit(Value::Array(elements)),
      | _ => Err(EngineError::VisitFailure { detail: "end_seq without a matching begin_seq".into() }),
    }
  }

  fn into_output(self: Box<Self>) -> Result<String, EngineError> {
    if !self.stack.is_empty() {
      return Err(EngineError::VisitFailure { detail: "document finished with unclosed nodes".into() });
    }
    let root = self.root.ok_or_else(|| EngineError::VisitFailure { detail: "no value was visited".into() })?;
    serde_json::to_string(&root).map_err(|error| EngineError::VisitFailure { detail: error.to_string() })
  }
}

enum Frame {
  Object(Map<String, Value>),
  Seq(Vec<Value>),
}
