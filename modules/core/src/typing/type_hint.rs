//! Parsed type reference.

use serde::{Deserialize, Serialize};

/// Target shape of a node, parsed from a textual type reference.
///
/// Class names are opaque dotted identifiers (`"app.model.Point"`); the
/// remaining variants are built-in shapes with well-known names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeHint {
  /// No constraint; the wire value is taken as-is.
  Any,
  /// Boolean scalar.
  Bool,
  /// Signed integer scalar.
  Int,
  /// Floating point scalar.
  Float,
  /// Textual scalar.
  Str,
  /// Timezone-normalized point in time.
  DateTime,
  /// Ordered sequence with an optional element hint.
  Collection(Option<Box<TypeHint>>),
  /// String-keyed mapping with an optional value hint.
  Map(Option<Box<TypeHint>>),
  /// Metadata-described class.
  Class(String),
}

impl TypeHint {
  /// Returns the name used as the most-derived entry of a handler lookup chain.
  #[must_use]
  pub fn dispatch_name(&self) -> &str {
    match self {
      | Self::Any => "any",
      | Self::Bool => "bool",
      | Self::Int => "int",
      | Self::Float => "float",
      | Self::Str => "string",
      | Self::DateTime => "datetime",
      | Self::Collection(_) => "collection",
      | Self::Map(_) => "map",
      | Self::Class(name) => name,
    }
  }

  /// Returns the element hint of a collection, defaulting to [`TypeHint::Any`].
  #[must_use]
  pub fn element_hint(&self) -> &TypeHint {
    match self {
      | Self::Collection(Some(element)) | Self::Map(Some(element)) => element,
      | _ => &TypeHint::Any,
    }
  }
}
