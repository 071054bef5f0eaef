//! Traversal direction marker.

/// Direction of a traversal, keying handler and visitor lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
  /// Object graph to wire format.
  Serialization,
  /// Wire format to object graph.
  Deserialization,
}

impl Direction {
  /// Returns the lowercase name used in diagnostics.
  #[must_use]
  pub const fn as_str(&self) -> &'static str {
    match self {
      | Self::Serialization => "serialization",
      | Self::Deserialization => "deserialization",
    }
  }
}

impl core::fmt::Display for Direction {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str(self.as_str())
  }
}
