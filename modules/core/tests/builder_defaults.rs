use std::sync::Arc;

use vellum_core_rs::{
  builder::SerializerBuilder,
  visitor::JsonSerializationVisitor,
  EngineError, GraphValue,
};

#[test]
fn default_handlers_decode_datetimes() {
  let mut builder = SerializerBuilder::new();
  let engine = builder.build().expect("build");
  let value = engine.deserialize(r#""2024-05-01T09:30:00+00:00""#, "datetime", "json").expect("deserialize");
  assert!(matches!(value, GraphValue::DateTime(_)));
}

#[test]
fn touching_handler_configuration_disables_the_builtin_datetime_handler() {
  let mut builder = SerializerBuilder::new().configure_handlers(|_| {});
  let engine = builder.build().expect("build");
  let error = engine.deserialize(r#""2024-05-01T09:30:00+00:00""#, "datetime", "json").expect_err("no handler");
  assert!(matches!(error, EngineError::UnexpectedValue { .. }));
}

#[test]
fn explicit_default_registration_restores_the_builtin_set() {
  let mut builder = SerializerBuilder::new().configure_handlers(|_| {}).add_default_handlers();
  let engine = builder.build().expect("build");
  let value = engine.deserialize(r#""2024-05-01T09:30:00+00:00""#, "datetime", "json").expect("deserialize");
  assert!(matches!(value, GraphValue::DateTime(_)));
}

#[test]
fn touching_the_visitor_table_suppresses_both_default_tables() {
  let mut builder =
    SerializerBuilder::new().set_serialization_visitor("json", Arc::new(|| Box::new(JsonSerializationVisitor::new())));
  let engine = builder.build().expect("build");

  engine.serialize_value(GraphValue::Int(1), "json").expect("custom table covers json");
  let error = engine.serialize_value(GraphValue::Int(1), "xml").expect_err("xml default suppressed");
  assert!(matches!(error, EngineError::UnsupportedFormat { .. }));
  let error = engine.deserialize("1", "int", "json").expect_err("deserialization table suppressed");
  assert!(matches!(error, EngineError::UnsupportedFormat { .. }));
}

#[test]
fn datetime_collections_go_through_the_builtin_handlers() {
  let mut builder = SerializerBuilder::new();
  let engine = builder.build().expect("build");
  let value = engine
    .deserialize(r#"["2024-05-01T09:30:00+00:00", "2024-05-02T09:30:00+00:00"]"#, "collection<datetime>", "json")
    .expect("deserialize");
  let GraphValue::Seq(instants) = value else {
    panic!("expected a sequence");
  };
  assert_eq!(instants.len(), 2);
  assert!(instants.iter().all(|instant| matches!(instant, GraphValue::DateTime(_))));
}
