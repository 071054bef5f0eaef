//! Neutral in-memory value tree exchanged between navigators, handlers and visitors.

#[cfg(test)]
mod tests;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

use crate::reflective::{ObjectRef, Reflective};

/// Format-independent value produced and consumed by graph navigation.
///
/// Scalars map one-to-one onto wire scalars; `Seq` and `Map` are the
/// structural composites; `Object` carries a live instance that still has to
/// be (or just has been) navigated.
#[derive(Debug, Clone)]
pub enum GraphValue {
  /// Absent value.
  Null,
  /// Boolean scalar.
  Bool(bool),
  /// Signed integer scalar.
  Int(i64),
  /// Floating point scalar.
  Float(f64),
  /// Textual scalar.
  Str(String),
  /// Timezone-normalized point in time.
  DateTime(DateTime<Utc>),
  /// Ordered sequence of values.
  Seq(Vec<GraphValue>),
  /// Order-preserving string-keyed mapping.
  Map(IndexMap<String, GraphValue>),
  /// Live object reference awaiting metadata-driven navigation.
  Object(ObjectRef),
}

impl GraphValue {
  /// Returns the stable kind name used for handler dispatch and diagnostics.
  #[must_use]
  pub fn kind_name(&self) -> &'static str {
    match self {
      | Self::Null => "null",
      | Self::Bool(_) => "bool",
      | Self::Int(_) => "int",
      | Self::Float(_) => "float",
      | Self::Str(_) => "string",
      | Self::DateTime(_) => "datetime",
      | Self::Seq(_) => "collection",
      | Self::Map(_) => "map",
      | Self::Object(_) => "object",
    }
  }

  /// Returns `true` for [`GraphValue::Null`].
  #[must_use]
  pub const fn is_null(&self) -> bool {
    matches!(self, Self::Null)
  }

  /// Returns the boolean payload if this is a `Bool`.
  #[must_use]
  pub const fn as_bool(&self) -> Option<bool> {
    match self {
      | Self::Bool(value) => Some(*value),
      | _ => None,
    }
  }

  /// Returns the integer payload if this is an `Int`.
  #[must_use]
  pub const fn as_int(&self) -> Option<i64> {
    match self {
      | Self::Int(value) => Some(*value),
      | _ => None,
    }
  }

  /// Returns the float payload if this is a `Float`.
  #[must_use]
  pub const fn as_float(&self) -> Option<f64> {
    match self {
      | Self::Float(value) => Some(*value),
      | _ => None,
    }
  }

  /// Returns the string payload if this is a `Str`.
  #[must_use]
  pub fn as_str(&self) -> Option<&str> {
    match self {
      | Self::Str(value) => Some(value),
      | _ => None,
    }
  }

  /// Returns the map payload if this is a `Map`.
  #[must_use]
  pub const fn as_map(&self) -> Option<&IndexMap<String, GraphValue>> {
    match self {
      | Self::Map(entries) => Some(entries),
      | _ => None,
    }
  }

  /// Consumes the value and returns the object reference if this is an `Object`.
  #[must_use]
  pub fn into_object(self) -> Option<ObjectRef> {
    match self {
      | Self::Object(object) => Some(object),
      | _ => None,
    }
  }

  /// Downcasts an `Object` payload to a concrete reflective type by cloning it.
  #[must_use]
  pub fn downcast_object<T>(&self) -> Option<T>
  where
    T: Reflective + Clone, {
    match self {
      | Self::Object(object) => object.as_any().downcast_ref::<T>().cloned(),
      | _ => None,
    }
  }
}

impl PartialEq for GraphValue {
  fn eq(&self, other: &Self) -> bool {
    match (self, other) {
      | (Self::Null, Self::Null) => true,
      | (Self::Bool(a), Self::Bool(b)) => a == b,
      | (Self::Int(a), Self::Int(b)) => a == b,
      | (Self::Float(a), Self::Float(b)) => a == b,
      | (Self::Str(a), Self::Str(b)) => a == b,
      | (Self::DateTime(a), Self::DateTime(b)) => a == b,
      | (Self::Seq(a), Self::Seq(b)) => a == b,
      | (Self::Map(a), Self::Map(b)) => a == b,
      | (Self::Object(a), Self::Object(b)) => std::sync::Arc::ptr_eq(a, b),
      | _ => false,
    }
  }
}

impl From<bool> for GraphValue {
  fn from(value: bool) -> Self {
    Self::Bool(value)
  }
}

impl From<i64> for GraphValue {
  fn from(value: i64) -> Self {
    Self::Int(value)
  }
}

impl From<f64> for GraphValue {
  fn from(value: f64) -> Self {
    Self::Float(value)
  }
}

impl From<&str> for GraphValue {
  fn from(value: &str) -> Self {
    Self::Str(value.into())
  }
}

impl From<String> for GraphValue {
  fn from(value: String) -> Self {
    Self::Str(value)
  }
}

impl From<DateTime<Utc>> for GraphValue {
  fn from(value: DateTime<Utc>) -> Self {
    Self::DateTime(value)
  }
}

impl From<Vec<GraphValue>> for GraphValue {
  fn from(value: Vec<GraphValue>) -> Self {
    Self::Seq(value)
  }
}
