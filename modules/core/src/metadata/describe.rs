//! Compile-time metadata source.

use super::class_metadata::ClassMetadata;

/// Implemented by types that carry their own class metadata.
///
/// Plays the role a runtime attribute reader plays in reflective hosts: the
/// descriptor registry collects `describe()` outputs and serves them through
/// the default descriptor reader.
pub trait Describe {
  /// Returns the stable class name, matching [`ClassMetadata::class_name`].
  fn class_name() -> &'static str;

  /// Produces the class metadata.
  fn describe() -> ClassMetadata;
}
