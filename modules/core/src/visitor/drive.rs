//! Tree walker feeding a serialization visitor.

use super::serialization_visitor::SerializationVisitor;
use crate::{error::EngineError, graph_value::GraphValue};

/// Walks a resolved wire value through the visitor.
///
/// Live objects must have been navigated away before this point; meeting one
/// here means a handler returned an unconverted instance.
///
/// # Errors
///
/// Propagates visitor failures and rejects unnavigated objects.
pub fn drive(visitor: &mut dyn SerializationVisitor, value: &GraphValue) -> Result<(), EngineError> {
  match value {
    | GraphValue::Null => visitor.visit_null(),
    | GraphValue::Bool(value) => visitor.visit_bool(*value),
    | GraphValue::Int(value) => visitor.visit_int(*value),
    | GraphValue::Float(value) => visitor.visit_float(*value),
    | GraphValue::Str(value) => visitor.visit_str(value),
    | GraphValue::DateTime(instant) => visitor.visit_str(&instant.to_rfc3339()),
    | GraphValue::Seq(elements) => {
      visitor.begin_seq()?;
      for element in elements {
        drive(visitor, element)?;
      }
      visitor.end_seq()
    },
    | GraphValue::Map(entries) => {
      visitor.begin_object()?;
      for (name, entry) in entries {
        visitor.property_name(name)?;
        drive(visitor, entry)?;
      }
      visitor.end_object()
    },
    | GraphValue::Object(object) => Err(EngineError::VisitFailure {
      detail: format!("unnavigated object of type {:?} reached the visitor", object.class_name()),
    }),
  }
}
