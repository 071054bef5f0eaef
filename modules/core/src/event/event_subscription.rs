//! Declared interest of a subscriber.

use super::event_kind::EventKind;

/// One lifecycle interest, optionally restricted to a type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSubscription {
  kind:        EventKind,
  type_filter: Option<String>,
}

impl EventSubscription {
  /// Creates a subscription for every type at the given lifecycle point.
  #[must_use]
  pub const fn new(kind: EventKind) -> Self {
    Self { kind, type_filter: None }
  }

  /// Restricts the subscription to one type name.
  #[must_use]
  pub fn for_type(kind: EventKind, type_name: impl Into<String>) -> Self {
    Self { kind, type_filter: Some(type_name.into()) }
  }

  /// Returns the lifecycle point.
  #[must_use]
  pub const fn kind(&self) -> EventKind {
    self.kind
  }

  /// Returns `true` when this subscription covers the given event site.
  #[must_use]
  pub fn accepts(&self, kind: EventKind, type_name: &str) -> bool {
    self.kind == kind && self.type_filter.as_deref().is_none_or(|declared| declared == type_name)
  }
}
