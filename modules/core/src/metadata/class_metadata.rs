//! Structural description of one class.

use serde::{Deserialize, Serialize};

use super::property_metadata::PropertyMetadata;

/// Describes a class for metadata-driven traversal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassMetadata {
  class_name: String,
  extends:    Option<String>,
  interface:  bool,
  properties: Vec<PropertyMetadata>,
}

impl ClassMetadata {
  /// Creates empty metadata for the named class.
  #[must_use]
  pub fn new(class_name: impl Into<String>) -> Self {
    Self { class_name: class_name.into(), extends: None, interface: false, properties: Vec::new() }
  }

  /// Declares the parent class whose metadata is merged in.
  #[must_use]
  pub fn with_extends(mut self, parent: impl Into<String>) -> Self {
    self.extends = Some(parent.into());
    self
  }

  /// Marks this class as an interface-like declaration.
  #[must_use]
  pub const fn as_interface(mut self) -> Self {
    self.interface = true;
    self
  }

  /// Appends a property declaration.
  #[must_use]
  pub fn with_property(mut self, property: PropertyMetadata) -> Self {
    self.properties.push(property);
    self
  }

  /// Returns the class name.
  #[must_use]
  pub fn class_name(&self) -> &str {
    &self.class_name
  }

  /// Returns the declared parent class, if any.
  #[must_use]
  pub fn extends(&self) -> Option<&str> {
    self.extends.as_deref()
  }

  /// Returns `true` when this class is an interface-like declaration.
  #[must_use]
  pub const fn is_interface(&self) -> bool {
    self.interface
  }

  /// Returns the declared properties, parents first after merging.
  #[must_use]
  pub fn properties(&self) -> &[PropertyMetadata] {
    &self.properties
  }

  /// Returns the property with the given declared name.
  #[must_use]
  pub fn property(&self, name: &str) -> Option<&PropertyMetadata> {
    self.properties.iter().find(|property| property.name() == name)
  }

  /// Merges a resolved parent's properties in front of this class's own.
  ///
  /// A property redeclared by this class shadows the parent's declaration.
  pub fn merge_parent(&mut self, parent: &ClassMetadata) {
    let mut merged: Vec<PropertyMetadata> = parent
      .properties
      .iter()
      .filter(|inherited| self.property(inherited.name()).is_none())
      .cloned()
      .collect();
    merged.append(&mut self.properties);
    self.properties = merged;
  }
}
