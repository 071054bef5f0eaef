//! Mutable in-flight event payload.

use super::event_kind::EventKind;
use crate::graph_value::GraphValue;

/// Event handed to subscribers during traversal.
///
/// The value is the in-flight node: the live object before conversion for
/// pre events, the produced value after conversion for post events.
/// Subscribers may rewrite it; the traversal continues with whatever is left
/// in place.
pub struct ObjectEvent<'a> {
  kind:      EventKind,
  type_name: &'a str,
  format:    &'a str,
  value:     &'a mut GraphValue,
}

impl<'a> ObjectEvent<'a> {
  /// Creates an event for one lifecycle point.
  #[must_use]
  pub fn new(kind: EventKind, type_name: &'a str, format: &'a str, value: &'a mut GraphValue) -> Self {
    Self { kind, type_name, format, value }
  }

  /// Returns the lifecycle point.
  #[must_use]
  pub const fn kind(&self) -> EventKind {
    self.kind
  }

  /// Returns the type name of the node.
  #[must_use]
  pub const fn type_name(&self) -> &str {
    self.type_name
  }

  /// Returns the wire format of the call.
  #[must_use]
  pub const fn format(&self) -> &str {
    self.format
  }

  /// Returns the in-flight value.
  #[must_use]
  pub fn value(&self) -> &GraphValue {
    self.value
  }

  /// Returns the in-flight value for mutation.
  pub fn value_mut(&mut self) -> &mut GraphValue {
    self.value
  }
}
