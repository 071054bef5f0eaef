//! Serialized-name aware naming wrapper.

use std::sync::Arc;

use super::property_naming_strategy::PropertyNamingStrategy;
use crate::metadata::PropertyMetadata;

/// Honors an explicit serialized name declared in metadata, delegating to an
/// inner transformer otherwise.
///
/// This is the default naming strategy, layered over
/// [`CamelCaseNamingStrategy`](super::CamelCaseNamingStrategy).
pub struct SerializedNameStrategy {
  delegate: Arc<dyn PropertyNamingStrategy>,
}

impl SerializedNameStrategy {
  /// Creates a strategy delegating unnamed properties to `delegate`.
  #[must_use]
  pub fn over(delegate: Arc<dyn PropertyNamingStrategy>) -> Self {
    Self { delegate }
  }
}

impl PropertyNamingStrategy for SerializedNameStrategy {
  fn translate(&self, property: &PropertyMetadata) -> String {
    match property.serialized_name() {
      | Some(name) => name.into(),
      | None => self.delegate.translate(property),
    }
  }
}
