use std::{any::Any, sync::Arc};

use chrono::{DateTime, TimeZone, Utc};
use vellum_core_rs::{
  builder::SerializerBuilder,
  metadata::{ClassMetadata, Describe, PropertyMetadata},
  typing::TypeHint,
  EngineError, GraphValue, Reflective, Serializer,
};

#[derive(Debug, Clone, Default, PartialEq)]
struct Point {
  x:      i64,
  y:      f64,
  label:  String,
  active: bool,
}

impl Describe for Point {
  fn class_name() -> &'static str {
    "demo.Point"
  }

  fn describe() -> ClassMetadata {
    ClassMetadata::new(<Self as Describe>::class_name())
      .with_property(PropertyMetadata::new("x").with_type_hint(TypeHint::Int))
      .with_property(PropertyMetadata::new("y").with_type_hint(TypeHint::Float))
      .with_property(PropertyMetadata::new("label").with_type_hint(TypeHint::Str))
      .with_property(PropertyMetadata::new("active").with_type_hint(TypeHint::Bool))
  }
}

impl Reflective for Point {
  fn class_name(&self) -> &str {
    "demo.Point"
  }

  fn property(&self, name: &str) -> Option<GraphValue> {
    match name {
      | "x" => Some(GraphValue::Int(self.x)),
      | "y" => Some(GraphValue::Float(self.y)),
      | "label" => Some(GraphValue::Str(self.label.clone())),
      | "active" => Some(GraphValue::Bool(self.active)),
      | _ => None,
    }
  }

  fn set_property(&mut self, name: &str, value: GraphValue) -> Result<(), EngineError> {
    match (name, value) {
      | ("x", GraphValue::Int(x)) => self.x = x,
      | ("y", GraphValue::Float(y)) => self.y = y,
      | ("label", GraphValue::Str(label)) => self.label = label,
      | ("active", GraphValue::Bool(active)) => self.active = active,
      | (name, other) => {
        return Err(EngineError::UnexpectedValue {
          expected: format!("a value for {name}"),
          found:    other.kind_name().into(),
        });
      },
    }
    Ok(())
  }

  fn as_any(&self) -> &dyn Any {
    self
  }

  fn as_any_mut(&mut self) -> &mut dyn Any {
    self
  }
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Author {
  full_name: String,
}

impl Describe for Author {
  fn class_name() -> &'static str {
    "demo.Author"
  }

  fn describe() -> ClassMetadata {
    ClassMetadata::new(<Self as Describe>::class_name())
      .with_property(PropertyMetadata::new("fullName").with_type_hint(TypeHint::Str).with_serialized_name("name"))
  }
}

impl Reflective for Author {
  fn class_name(&self) -> &str {
    "demo.Author"
  }

  fn property(&self, name: &str) -> Option<GraphValue> {
    match name {
      | "fullName" => Some(GraphValue::Str(self.full_name.clone())),
      | _ => None,
    }
  }

  fn set_property(&mut self, name: &str, value: GraphValue) -> Result<(), EngineError> {
    match (name, value) {
      | ("fullName", GraphValue::Str(full_name)) => {
        self.full_name = full_name;
        Ok(())
      },
      | (name, other) => {
        Err(EngineError::UnexpectedValue { expected: format!("a value for {name}"), found: other.kind_name().into() })
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

#[derive(Debug, Clone, Default, PartialEq)]
struct Post {
  title:      String,
  created_at: DateTime<Utc>,
  tags:       Vec<String>,
  author:     Option<Author>,
}

impl Describe for Post {
  fn class_name() -> &'static str {
    "demo.Post"
  }

  fn describe() -> ClassMetadata {
    ClassMetadata::new(<Self as Describe>::class_name())
      .with_property(PropertyMetadata::new("title").with_type_hint(TypeHint::Str))
      .with_property(PropertyMetadata::new("createdAt").with_type_hint(TypeHint::DateTime))
      .with_property(PropertyMetadata::new("tags").with_type_hint(TypeHint::Collection(Some(Box::new(TypeHint::Str)))))
      .with_property(PropertyMetadata::new("author").with_type_hint(TypeHint::Class("demo.Author".into())))
  }
}

impl Reflective for Post {
  fn class_name(&self) -> &str {
    "demo.Post"
  }

  fn property(&self, name: &str) -> Option<GraphValue> {
    match name {
      | "title" => Some(GraphValue::Str(self.title.clone())),
      | "createdAt" => Some(GraphValue::DateTime(self.created_at)),
      | "tags" => Some(GraphValue::Seq(self.tags.iter().map(|tag| GraphValue::Str(tag.clone())).collect())),
      | "author" => Some(match &self.author {
        | Some(author) => GraphValue::Object(Arc::new(author.clone())),
        | None => GraphValue::Null,
      }),
      | _ => None,
    }
  }

  fn set_property(&mut self, name: &str, value: GraphValue) -> Result<(), EngineError> {
    match (name, value) {
      | ("title", GraphValue::Str(title)) => self.title = title,
      | ("createdAt", GraphValue::DateTime(created_at)) => self.created_at = created_at,
      | ("tags", GraphValue::Seq(tags)) => {
        let mut collected = Vec::with_capacity(tags.len());
        for tag in tags {
          match tag {
            | GraphValue::Str(tag) => collected.push(tag),
            | other => {
              return Err(EngineError::UnexpectedValue {
                expected: "a string tag".into(),
                found:    other.kind_name().into(),
              });
            },
          }
        }
        self.tags = collected;
      },
      | ("author", GraphValue::Null) => self.author = None,
      | ("author", value @ GraphValue::Object(_)) => {
        self.author = Some(value.downcast_object::<Author>().ok_or_else(|| EngineError::UnexpectedValue {
          expected: "a demo.Author instance".into(),
          found:    "another object".into(),
        })?);
      },
      | (name, other) => {
        return Err(EngineError::UnexpectedValue {
          expected: format!("a value for {name}"),
          found:    other.kind_name().into(),
        });
      },
    }
    Ok(())
  }

  fn as_any(&self) -> &dyn Any {
    self
  }

  fn as_any_mut(&mut self) -> &mut dyn Any {
    self
  }
}

fn engine() -> Serializer {
  SerializerBuilder::new()
    .register_type::<Point>()
    .register_type::<Author>()
    .register_type::<Post>()
    .build()
    .expect("build")
}

#[test]
fn json_round_trip_preserves_primitive_properties() {
  let engine = engine();
  let point = Point { x: 3, y: 2.5, label: "origin-ish".into(), active: true };

  let document = engine.serialize(Arc::new(point.clone()), "json").expect("serialize");
  assert_eq!(document, r#"{"x":3,"y":2.5,"label":"origin-ish","active":true}"#);

  let recovered: Point = engine.deserialize_as(&document, "json").expect("deserialize");
  assert_eq!(recovered, point);
}

#[test]
fn json_round_trip_covers_nested_objects_collections_and_datetimes() {
  let engine = engine();
  let post = Post {
    title:      "release notes".into(),
    created_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap(),
    tags:       vec!["rust".into(), "serialization".into()],
    author:     Some(Author { full_name: "Avery Quinn".into() }),
  };

  let document = engine.serialize(Arc::new(post.clone()), "json").expect("serialize");
  assert_eq!(
    document,
    concat!(
      r#"{"title":"release notes","created_at":"2024-05-01T09:30:00+00:00","#,
      r#""tags":["rust","serialization"],"author":{"name":"Avery Quinn"}}"#
    )
  );

  let recovered: Post = engine.deserialize_as(&document, "json").expect("deserialize");
  assert_eq!(recovered, post);
}

#[test]
fn xml_round_trip_recovers_scalars_through_type_hints() {
  let engine = engine();
  let point = Point { x: -4, y: 0.25, label: "a<b&c".into(), active: false };

  let document = engine.serialize(Arc::new(point.clone()), "xml").expect("serialize");
  assert!(document.starts_with("<?xml"));

  let recovered: Point = engine.deserialize_as(&document, "xml").expect("deserialize");
  assert_eq!(recovered, point);
}

#[test]
fn xml_round_trip_covers_datetimes_and_collections() {
  let engine = engine();
  let post = Post {
    title:      "xml edition".into(),
    created_at: Utc.with_ymd_and_hms(2023, 11, 5, 23, 59, 59).unwrap(),
    tags:       vec!["one".into(), "two".into()],
    author:     Some(Author { full_name: "Sam Lee".into() }),
  };

  let document = engine.serialize(Arc::new(post.clone()), "xml").expect("serialize");
  let recovered: Post = engine.deserialize_as(&document, "xml").expect("deserialize");
  assert_eq!(recovered, post);
}

#[test]
fn missing_wire_members_leave_defaults_in_place() {
  let engine = engine();
  let recovered: Point = engine.deserialize_as(r#"{"x":9}"#, "json").expect("deserialize");
  assert_eq!(recovered, Point { x: 9, ..Point::default() });
}
