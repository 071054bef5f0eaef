use std::any::Any;

use crate::{
  error::EngineError,
  graph_value::GraphValue,
  metadata::{ClassMetadata, Describe, DescriptorRegistry, PropertyMetadata},
  reflective::Reflective,
};

#[derive(Debug, Clone, Default)]
struct Widget {
  width: i64,
}

impl Describe for Widget {
  fn class_name() -> &'static str {
    "test.Widget"
  }

  fn describe() -> ClassMetadata {
    ClassMetadata::new(<Self as Describe>::class_name()).with_property(PropertyMetadata::new("width"))
  }
}

impl Reflective for Widget {
  fn class_name(&self) -> &str {
    "test.Widget"
  }

  fn property(&self, name: &str) -> Option<GraphValue> {
    match name {
      | "width" => Some(GraphValue::Int(self.width)),
      | _ => None,
    }
  }

  fn set_property(&mut self, name: &str, value: GraphValue) -> Result<(), EngineError> {
    match (name, value) {
      | ("width", GraphValue::Int(width)) => {
        self.width = width;
        Ok(())
      },
      | _ => Err(EngineError::UnknownProperty { class: "test.Widget".into(), property: name.into() }),
    }
  }

  fn as_any(&self) -> &dyn Any {
    self
  }

  fn as_any_mut(&mut self) -> &mut dyn Any {
    self
  }
}

#[test]
fn serves_descriptors_for_registered_types() {
  let mut registry = DescriptorRegistry::new();
  assert!(registry.is_empty());
  registry.register::<Widget>();
  assert!(registry.contains("test.Widget"));
  assert_eq!(registry.len(), 1);
  let metadata = registry.describe("test.Widget").expect("descriptor");
  assert_eq!(metadata.class_name(), "test.Widget");
  assert_eq!(metadata.properties().len(), 1);
  assert!(registry.describe("test.Unknown").is_none());
}

#[test]
fn instantiates_through_the_default_hook() {
  let mut registry = DescriptorRegistry::new();
  registry.register::<Widget>();
  let instance = registry.instantiate("test.Widget").expect("instance");
  assert_eq!(instance.class_name(), "test.Widget");
  assert_eq!(instance.property("width"), Some(GraphValue::Int(0)));
  assert!(registry.instantiate("test.Unknown").is_none());
}

#[test]
fn clones_are_independent_snapshots() {
  let registry = DescriptorRegistry::new();
  let snapshot = registry.clone();
  let mut registry = registry;
  registry.register::<Widget>();
  assert!(snapshot.is_empty());
  assert!(registry.contains("test.Widget"));
}
