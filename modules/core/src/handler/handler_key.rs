//! Exact registration key.

use super::direction::Direction;

/// Identifies one exact handler registration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HandlerKey {
  direction: Direction,
  type_name: String,
  format:    String,
}

impl HandlerKey {
  /// Creates a key for the given triple.
  #[must_use]
  pub fn new(direction: Direction, type_name: impl Into<String>, format: impl Into<String>) -> Self {
    Self { direction, type_name: type_name.into(), format: format.into() }
  }

  /// Returns the traversal direction.
  #[must_use]
  pub const fn direction(&self) -> Direction {
    self.direction
  }

  /// Returns the registered type name.
  #[must_use]
  pub fn type_name(&self) -> &str {
    &self.type_name
  }

  /// Returns the registered wire format.
  #[must_use]
  pub fn format(&self) -> &str {
    &self.format
  }
}
