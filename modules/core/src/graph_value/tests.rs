use std::{any::Any, sync::Arc};

use chrono::{TimeZone, Utc};
use indexmap::IndexMap;

use crate::{error::EngineError, graph_value::GraphValue, reflective::Reflective};

#[derive(Debug, Clone, Default, PartialEq)]
struct Marker {
  id: i64,
}

impl Reflective for Marker {
  fn class_name(&self) -> &str {
    "test.Marker"
  }

  fn property(&self, name: &str) -> Option<GraphValue> {
    match name {
      | "id" => Some(GraphValue::Int(self.id)),
      | _ => None,
    }
  }

  fn set_property(&mut self, name: &str, value: GraphValue) -> Result<(), EngineError> {
    match (name, value) {
      | ("id", GraphValue::Int(id)) => {
        self.id = id;
        Ok(())
      },
      | ("id", other) => {
        Err(EngineError::UnexpectedValue { expected: "an int scalar".into(), found: other.kind_name().into() })
      },
      | _ => Err(EngineError::UnknownProperty { class: self.class_name().into(), property: name.into() }),
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
fn kind_names_cover_every_variant() {
  let instant = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
  assert_eq!(GraphValue::Null.kind_name(), "null");
  assert_eq!(GraphValue::Bool(true).kind_name(), "bool");
  assert_eq!(GraphValue::Int(3).kind_name(), "int");
  assert_eq!(GraphValue::Float(1.5).kind_name(), "float");
  assert_eq!(GraphValue::from("x").kind_name(), "string");
  assert_eq!(GraphValue::DateTime(instant).kind_name(), "datetime");
  assert_eq!(GraphValue::Seq(Vec::new()).kind_name(), "collection");
  assert_eq!(GraphValue::Map(IndexMap::new()).kind_name(), "map");
  assert_eq!(GraphValue::Object(Arc::new(Marker::default())).kind_name(), "object");
}

#[test]
fn objects_compare_by_identity() {
  let shared: Arc<dyn Reflective> = Arc::new(Marker { id: 7 });
  let left = GraphValue::Object(shared.clone());
  let right = GraphValue::Object(shared);
  let other = GraphValue::Object(Arc::new(Marker { id: 7 }));
  assert_eq!(left, right);
  assert_ne!(left, other);
}

#[test]
fn scalars_compare_by_value() {
  assert_eq!(GraphValue::from(11_i64), GraphValue::Int(11));
  assert_eq!(GraphValue::from("label"), GraphValue::Str("label".into()));
  assert_ne!(GraphValue::Int(1), GraphValue::Float(1.0));
}

#[test]
fn downcasts_object_payloads() {
  let value = GraphValue::Object(Arc::new(Marker { id: 42 }));
  let marker = value.downcast_object::<Marker>().expect("downcast");
  assert_eq!(marker.id, 42);
  assert!(GraphValue::Int(1).downcast_object::<Marker>().is_none());
}

#[test]
fn accessors_match_variants() {
  assert!(GraphValue::Null.is_null());
  assert_eq!(GraphValue::Bool(true).as_bool(), Some(true));
  assert_eq!(GraphValue::Int(5).as_int(), Some(5));
  assert_eq!(GraphValue::Float(0.5).as_float(), Some(0.5));
  assert_eq!(GraphValue::from("a").as_str(), Some("a"));
  assert!(GraphValue::Int(5).as_str().is_none());
}
