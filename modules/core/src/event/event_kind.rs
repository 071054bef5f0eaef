//! Lifecycle event names.

/// Points in the traversal lifecycle at which subscribers run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
  /// An object is about to be converted to wire form.
  PreSerialize,
  /// An object's wire form is complete but not yet written.
  PostSerialize,
  /// Wire data for an object is about to be navigated.
  PreDeserialize,
  /// An object has been constructed and populated.
  PostDeserialize,
}

impl EventKind {
  /// Returns the lowercase name used in diagnostics.
  #[must_use]
  pub const fn as_str(&self) -> &'static str {
    match self {
      | Self::PreSerialize => "pre_serialize",
      | Self::PostSerialize => "post_serialize",
      | Self::PreDeserialize => "pre_deserialize",
      | Self::PostDeserialize => "post_deserialize",
    }
  }
}
