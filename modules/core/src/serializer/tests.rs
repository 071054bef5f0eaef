use std::{any::Any, sync::Arc};

use super::*;
use crate::{
  builder::SerializerBuilder,
  metadata::{ClassMetadata, PropertyMetadata},
  typing::TypeHint,
};

#[derive(Debug, Clone, Default, PartialEq)]
struct Pair {
  left:  i64,
  right: i64,
}

impl Describe for Pair {
  fn class_name() -> &'static str {
    "test.Pair"
  }

  fn describe() -> ClassMetadata {
    ClassMetadata::new(<Self as Describe>::class_name())
      .with_property(PropertyMetadata::new("left").with_type_hint(TypeHint::Int))
      .with_property(PropertyMetadata::new("right").with_type_hint(TypeHint::Int))
  }
}

impl Reflective for Pair {
  fn class_name(&self) -> &str {
    "test.Pair"
  }

  fn property(&self, name: &str) -> Option<GraphValue> {
    match name {
      | "left" => Some(GraphValue::Int(self.left)),
      | "right" => Some(GraphValue::Int(self.right)),
      | _ => None,
    }
  }

  fn set_property(&mut self, name: &str, value: GraphValue) -> Result<(), EngineError> {
    match (name, value) {
      | ("left", GraphValue::Int(left)) => {
        self.left = left;
        Ok(())
      },
      | ("right", GraphValue::Int(right)) => {
        self.right = right;
        Ok(())
      },
      | (name, other) => match name {
        | "left" | "right" => {
          Err(EngineError::UnexpectedValue { expected: "an int scalar".into(), found: other.kind_name().into() })
        },
        | _ => Err(EngineError::UnknownProperty { class: "test.Pair".into(), property: name.into() }),
      },
    }
  }

  fn as_any(&self) -> &dyn Any {
    self
  }

  fn as_any_mut(&mut self) -> &mut dyn Any {
    self
  }
}

fn engine() -> Serializer {
  SerializerBuilder::new().register_type::<Pair>().build().expect("build")
}

#[test]
fn serializes_described_objects_to_json() {
  let engine = engine();
  let document = engine.serialize(Arc::new(Pair { left: 1, right: 2 }), "json").expect("serialize");
  assert_eq!(document, r#"{"left":1,"right":2}"#);
}

#[test]
fn deserializes_documents_into_concrete_types() {
  let engine = engine();
  let pair: Pair = engine.deserialize_as(r#"{"left":1,"right":2}"#, "json").expect("deserialize");
  assert_eq!(pair, Pair { left: 1, right: 2 });
}

#[test]
fn unknown_formats_are_rejected_in_both_directions() {
  let engine = engine();
  let error = engine.serialize(Arc::new(Pair::default()), "yaml").expect_err("serialize");
  assert!(matches!(error, EngineError::UnsupportedFormat { direction: Direction::Serialization, .. }));
  let error = engine.deserialize("{}", "test.Pair", "yaml").expect_err("deserialize");
  assert!(matches!(error, EngineError::UnsupportedFormat { direction: Direction::Deserialization, .. }));
}

#[test]
fn serializes_bare_values_without_metadata() {
  let engine = engine();
  let document = engine.serialize_value(GraphValue::Seq(vec![GraphValue::Int(1), GraphValue::Int(2)]), "json")
    .expect("serialize");
  assert_eq!(document, "[1,2]");
}

#[test]
fn deserialize_object_requires_an_object_target() {
  let engine = engine();
  let error = engine.deserialize_object("3", "int", "json").expect_err("scalar target");
  assert!(matches!(error, EngineError::UnexpectedValue { .. }));
}

#[test]
fn engines_are_shareable_across_threads() {
  fn assert_send_sync<T: Send + Sync>() {}
  assert_send_sync::<Serializer>();

  let engine = Arc::new(engine());
  let handles: Vec<_> = (0..4_i64)
    .map(|index| {
      let engine = engine.clone();
      std::thread::spawn(move || {
        let document = engine.serialize(Arc::new(Pair { left: index, right: index + 1 }), "json").expect("serialize");
        let recovered: Pair = engine.deserialize_as(&document, "json").expect("deserialize");
        assert_eq!(recovered.left, index);
      })
    })
    .collect();
  for handle in handles {
    handle.join().expect("worker");
  }
}

#[test]
fn unregistered_classes_fail_with_unresolved_type() {
  let engine = engine();
  let error = engine.deserialize("{}", "test.Unknown", "json").expect_err("unknown class");
  assert!(matches!(error, EngineError::UnresolvedType { .. }));
}
