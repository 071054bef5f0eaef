use std::{any::Any, sync::Arc};

use vellum_core_rs::{
  builder::SerializerBuilder,
  metadata::{ClassMetadata, Describe, DescriptorReader, PropertyMetadata},
  typing::TypeHint,
  EngineError, GraphValue, Reflective,
};

#[derive(Debug, Clone, Default, PartialEq)]
struct Doc {
  text: String,
}

impl Describe for Doc {
  fn class_name() -> &'static str {
    "cache.Doc"
  }

  fn describe() -> ClassMetadata {
    ClassMetadata::new(<Self as Describe>::class_name()).with_property(PropertyMetadata::new("text").with_type_hint(TypeHint::Str))
  }
}

impl Reflective for Doc {
  fn class_name(&self) -> &str {
    "cache.Doc"
  }

  fn property(&self, name: &str) -> Option<GraphValue> {
    match name {
      | "text" => Some(GraphValue::Str(self.text.clone())),
      | _ => None,
    }
  }

  fn set_property(&mut self, name: &str, value: GraphValue) -> Result<(), EngineError> {
    match (name, value) {
      | ("text", GraphValue::Str(text)) => {
        self.text = text;
        Ok(())
      },
      | (name, _) => Err(EngineError::UnknownProperty { class: "cache.Doc".into(), property: name.into() }),
    }
  }

  fn as_any(&self) -> &dyn Any {
    self
  }

  fn as_any_mut(&mut self) -> &mut dyn Any {
    self
  }
}

struct RenamingReader;

impl DescriptorReader for RenamingReader {
  fn read(&self, class_name: &str) -> Result<Option<ClassMetadata>, EngineError> {
    if class_name != <Doc as Describe>::class_name() {
      return Ok(None);
    }
    Ok(Some(ClassMetadata::new(class_name).with_property(
      PropertyMetadata::new("text").with_type_hint(TypeHint::Str).with_serialized_name("renamed"),
    )))
  }
}

#[test]
fn building_with_a_cache_dir_creates_and_populates_both_subtrees() {
  let dir = tempfile::tempdir().expect("tempdir");
  let root = dir.path().join("cache");
  let mut builder = SerializerBuilder::new().register_type::<Doc>().set_cache_dir(&root).expect("cache dir");
  let engine = builder.build().expect("build");

  assert!(root.join("annotations").is_dir());
  assert!(root.join("metadata").is_dir());

  engine.serialize(Arc::new(Doc { text: "hi".into() }), "json").expect("serialize");
  assert!(root.join("annotations").join("cache.Doc.json").is_file());
  assert!(root.join("metadata").join("cache.Doc.json").is_file());
}

#[test]
fn warm_caches_shadow_descriptor_changes_until_debug_is_enabled() {
  let dir = tempfile::tempdir().expect("tempdir");
  let root = dir.path().join("cache");

  let mut builder = SerializerBuilder::new().register_type::<Doc>().set_cache_dir(&root).expect("cache dir");
  let engine = builder.build().expect("build");
  assert_eq!(engine.serialize(Arc::new(Doc { text: "hi".into() }), "json").expect("serialize"), r#"{"text":"hi"}"#);

  let mut cached = SerializerBuilder::new()
    .register_type::<Doc>()
    .set_descriptor_reader(Arc::new(RenamingReader))
    .set_cache_dir(&root)
    .expect("cache dir");
  let engine = cached.build().expect("build");
  assert_eq!(engine.serialize(Arc::new(Doc { text: "hi".into() }), "json").expect("serialize"), r#"{"text":"hi"}"#);

  let mut fresh = SerializerBuilder::new()
    .register_type::<Doc>()
    .set_descriptor_reader(Arc::new(RenamingReader))
    .set_cache_dir(&root)
    .expect("cache dir")
    .set_debug(true);
  let engine = fresh.build().expect("build");
  assert_eq!(
    engine.serialize(Arc::new(Doc { text: "hi".into() }), "json").expect("serialize"),
    r#"{"renamed":"hi"}"#
  );
}
