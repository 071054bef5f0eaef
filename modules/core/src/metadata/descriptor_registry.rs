//! Registry of compiled-in descriptors and instantiators.

#[cfg(test)]
mod tests;

use hashbrown::HashMap;

use super::{class_metadata::ClassMetadata, describe::Describe};
use crate::reflective::Reflective;

type DescribeFn = fn() -> ClassMetadata;
type InstantiateFn = fn() -> Box<dyn Reflective>;

/// Maps class names to descriptor and instantiator functions.
///
/// The builder owns a registry during configuration; `build()` freezes a
/// clone of it into the default descriptor reader and the default object
/// constructor, so later registrations never reach an already-built engine.
#[derive(Default, Clone)]
pub struct DescriptorRegistry {
  entries: HashMap<String, DescriptorEntry>,
}

impl DescriptorRegistry {
  /// Creates an empty registry.
  #[must_use]
  pub fn new() -> Self {
    Self { entries: HashMap::new() }
  }

  /// Registers a described type together with its default-value instantiator.
  ///
  /// Re-registration replaces the previous entry.
  pub fn register<T>(&mut self)
  where
    T: Describe + Reflective + Default, {
    self
      .entries
      .insert(<T as Describe>::class_name().into(), DescriptorEntry { describe: T::describe, instantiate: instantiate_default::<T> });
  }

  /// Produces metadata for the named class, if registered.
  #[must_use]
  pub fn describe(&self, class_name: &str) -> Option<ClassMetadata> {
    self.entries.get(class_name).map(|entry| (entry.describe)())
  }

  /// Instantiates the named class without running domain construction logic.
  #[must_use]
  pub fn instantiate(&self, class_name: &str) -> Option<Box<dyn Reflective>> {
    self.entries.get(class_name).map(|entry| (entry.instantiate)())
  }

  /// Returns `true` when the class is registered.
  #[must_use]
  pub fn contains(&self, class_name: &str) -> bool {
    self.entries.contains_key(class_name)
  }

  /// Returns the number of registered classes.
  #[must_use]
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Returns `true` when no classes are registered.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

#[derive(Clone)]
struct DescriptorEntry {
  describe:    DescribeFn,
  instantiate: InstantiateFn,
}

fn instantiate_default<T>() -> Box<dyn Reflective>
where
  T: Reflective + Default, {
  Box::new(T::default())
}
