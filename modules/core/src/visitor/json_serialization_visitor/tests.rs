use indexmap::IndexMap;

use crate::{
  error::EngineError,
  graph_value::GraphValue,
  visitor::{drive, JsonSerializationVisitor, SerializationVisitor},
};

fn render(value: &GraphValue) -> Result<String, EngineError> {
  let mut visitor: Box<dyn SerializationVisitor> = Box::new(JsonSerializationVisitor::new());
  drive(visitor.as_mut(), value)?;
  visitor.into_output()
}

#[test]
fn renders_scalars_and_composites() {
  let mut entries = IndexMap::new();
  entries.insert("label".to_string(), GraphValue::Str("a \"quoted\" name".into()));
  entries.insert("count".to_string(), GraphValue::Int(3));
  entries.insert("ratio".to_string(), GraphValue::Float(0.5));
  entries.insert("enabled".to_string(), GraphValue::Bool(true));
  entries.insert("note".to_string(), GraphValue::Null);
  entries.insert("tags".to_string(), GraphValue::Seq(vec![GraphValue::Str("a".into()), GraphValue::Str("b".into())]));
  let document = render(&GraphValue::Map(entries)).expect("render");
  assert_eq!(
    document,
    r#"{"label":"a \"quoted\" name","count":3,"ratio":0.5,"enabled":true,"note":null,"tags":["a","b"]}"#
  );
}

#[test]
fn preserves_property_order() {
  let mut entries = IndexMap::new();
  entries.insert("zulu".to_string(), GraphValue::Int(1));
  entries.insert("alpha".to_string(), GraphValue::Int(2));
  assert_eq!(render(&GraphValue::Map(entries)).expect("render"), r#"{"zulu":1,"alpha":2}"#);
}

#[test]
fn rejects_non_finite_floats() {
  let error = render(&GraphValue::Float(f64::INFINITY)).expect_err("infinite");
  assert!(matches!(error, EngineError::VisitFailure { .. }));
}

#[test]
fn rejects_out_of_band_events() {
  let mut visitor = JsonSerializationVisitor::new();
  let error = visitor.property_name("loose").expect_err("no object open");
  assert!(matches!(error, EngineError::VisitFailure { .. }));
  let error = visitor.end_object().expect_err("nothing to close");
  assert!(matches!(error, EngineError::VisitFailure { .. }));
}

#[test]
fn empty_documents_are_rejected() {
  let visitor: Box<dyn SerializationVisitor> = Box::new(JsonSerializationVisitor::new());
  let error = visitor.into_output().expect_err("no value");
  assert!(matches!(error, EngineError::VisitFailure { .. }));
}
