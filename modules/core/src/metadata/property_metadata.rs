//! Structural description of one property.

use serde::{Deserialize, Serialize};

use crate::typing::TypeHint;

/// Describes how a single property participates in traversal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyMetadata {
  name:            String,
  serialized_name: Option<String>,
  resolved_name:   Option<String>,
  type_hint:       TypeHint,
  expression:      Option<String>,
  readable:        bool,
  writable:        bool,
}

impl PropertyMetadata {
  /// Creates metadata for a readable, writable property of unconstrained type.
  #[must_use]
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name:            name.into(),
      serialized_name: None,
      resolved_name:   None,
      type_hint:       TypeHint::Any,
      expression:      None,
      readable:        true,
      writable:        true,
    }
  }

  /// Constrains the property to the given type hint.
  #[must_use]
  pub fn with_type_hint(mut self, hint: TypeHint) -> Self {
    self.type_hint = hint;
    self
  }

  /// Declares an explicit wire name, bypassing the naming strategy.
  #[must_use]
  pub fn with_serialized_name(mut self, name: impl Into<String>) -> Self {
    self.serialized_name = Some(name.into());
    self
  }

  /// Attaches an accessor expression evaluated instead of direct access.
  #[must_use]
  pub fn with_expression(mut self, expression: impl Into<String>) -> Self {
    self.expression = Some(expression.into());
    self
  }

  /// Marks the property as serialize-only.
  #[must_use]
  pub const fn read_only(mut self) -> Self {
    self.writable = false;
    self
  }

  /// Marks the property as deserialize-only.
  #[must_use]
  pub const fn write_only(mut self) -> Self {
    self.readable = false;
    self
  }

  /// Returns the declared property name.
  #[must_use]
  pub fn name(&self) -> &str {
    &self.name
  }

  /// Returns the explicit serialized name, if one was declared.
  #[must_use]
  pub fn serialized_name(&self) -> Option<&str> {
    self.serialized_name.as_deref()
  }

  /// Returns the wire name resolved by the naming strategy.
  ///
  /// Falls back to the declared name when no strategy has run yet.
  #[must_use]
  pub fn wire_name(&self) -> &str {
    self.resolved_name.as_deref().unwrap_or(&self.name)
  }

  /// Stores the wire name produced by the naming strategy.
  pub fn set_resolved_name(&mut self, name: impl Into<String>) {
    self.resolved_name = Some(name.into());
  }

  /// Returns the declared type hint.
  #[must_use]
  pub const fn type_hint(&self) -> &TypeHint {
    &self.type_hint
  }

  /// Returns the accessor expression, if one was declared.
  #[must_use]
  pub fn expression(&self) -> Option<&str> {
    self.expression.as_deref()
  }

  /// Returns `true` when the property participates in serialization.
  #[must_use]
  pub const fn readable(&self) -> bool {
    self.readable
  }

  /// Returns `true` when the property participates in deserialization.
  #[must_use]
  pub const fn writable(&self) -> bool {
    self.writable
  }
}
