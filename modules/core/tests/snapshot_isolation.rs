use std::{any::Any, sync::Arc};

use vellum_core_rs::{
  builder::SerializerBuilder,
  handler::Direction,
  metadata::{ClassMetadata, Describe, PropertyMetadata},
  EngineError, GraphValue, Reflective,
};

#[derive(Debug, Clone, Default, PartialEq)]
struct Widget {
  width: i64,
}

impl Describe for Widget {
  fn class_name() -> &'static str {
    "iso.Widget"
  }

  fn describe() -> ClassMetadata {
    ClassMetadata::new(<Self as Describe>::class_name()).with_property(PropertyMetadata::new("width"))
  }
}

impl Reflective for Widget {
  fn class_name(&self) -> &str {
    "iso.Widget"
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
      | (name, _) => Err(EngineError::UnknownProperty { class: "iso.Widget".into(), property: name.into() }),
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
fn engines_built_earlier_never_observe_later_registrations() {
  let mut builder = SerializerBuilder::new().register_type::<Widget>();
  let first = builder.build().expect("first build");
  assert_eq!(first.serialize(Arc::new(Widget { width: 5 }), "json").expect("serialize"), r#"{"width":5}"#);

  builder = builder.register_handler(
    Direction::Serialization,
    "iso.Widget",
    "json",
    Arc::new(|_, _| Ok(GraphValue::Str("overridden".into()))),
  );
  let second = builder.build().expect("second build");

  assert_eq!(second.serialize(Arc::new(Widget { width: 5 }), "json").expect("serialize"), r#""overridden""#);
  assert_eq!(first.serialize(Arc::new(Widget { width: 5 }), "json").expect("serialize"), r#"{"width":5}"#);
}

#[test]
fn later_type_registrations_do_not_reach_earlier_engines() {
  let mut builder = SerializerBuilder::new();
  let first = builder.build().expect("first build");
  builder = builder.register_type::<Widget>();
  let second = builder.build().expect("second build");

  let error = first.serialize(Arc::new(Widget { width: 1 }), "json").expect_err("not registered yet");
  assert!(matches!(error, EngineError::NoHandlerFound { .. }));
  second.serialize(Arc::new(Widget { width: 1 }), "json").expect("registered in time");
}
