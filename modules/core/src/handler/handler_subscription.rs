//! Declared interest of a subscribing handler.

use super::direction::Direction;

/// One (direction, type, format) interest declared by a subscribing handler.
///
/// The type matches by ancestry during lookup; a `None` format matches every
/// format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerSubscription {
  direction: Direction,
  type_name: String,
  format:    Option<String>,
}

impl HandlerSubscription {
  /// Creates a subscription bound to one format.
  #[must_use]
  pub fn new(direction: Direction, type_name: impl Into<String>, format: impl Into<String>) -> Self {
    Self { direction, type_name: type_name.into(), format: Some(format.into()) }
  }

  /// Creates a subscription matching every format.
  #[must_use]
  pub fn any_format(direction: Direction, type_name: impl Into<String>) -> Self {
    Self { direction, type_name: type_name.into(), format: None }
  }

  /// Returns the traversal direction.
  #[must_use]
  pub const fn direction(&self) -> Direction {
    self.direction
  }

  /// Returns the declared type name.
  #[must_use]
  pub fn type_name(&self) -> &str {
    &self.type_name
  }

  /// Returns `true` when this subscription covers the given call site.
  #[must_use]
  pub fn accepts(&self, direction: Direction, type_name: &str, format: &str) -> bool {
    self.direction == direction
      && self.type_name == type_name
      && self.format.as_deref().is_none_or(|declared| declared == format)
  }
}
