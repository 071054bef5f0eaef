//! Driver loading JSON metadata files through the namespace-prefix map.

#[cfg(test)]
mod tests;

use std::{
  fs,
  path::{Path, PathBuf},
  sync::Arc,
};

use serde::Deserialize;

use super::{class_metadata::ClassMetadata, metadata_driver::MetadataDriver, property_metadata::PropertyMetadata};
use crate::{error::EngineError, typing::TypeParser};

/// Resolves class names to metadata files via namespace-prefix mappings.
///
/// A class `app.model.Point` mapped through prefix `app.model` is looked up
/// as `<dir>/Point.json`; the empty prefix is the catch-all and maps the
/// full dotted name onto a directory path. Longer prefixes win.
pub struct FileMetadataDriver {
  dirs:        Vec<(String, PathBuf)>,
  type_parser: Arc<dyn TypeParser>,
}

impl FileMetadataDriver {
  /// Creates a driver over the given prefix map.
  #[must_use]
  pub fn new(mut dirs: Vec<(String, PathBuf)>, type_parser: Arc<dyn TypeParser>) -> Self {
    dirs.sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    Self { dirs, type_parser }
  }

  fn locate(&self, class_name: &str) -> Option<PathBuf> {
    for (prefix, dir) in &self.dirs {
      let relative = if prefix.is_empty() {
        class_name
      } else if let Some(stripped) = class_name.strip_prefix(prefix).and_then(|rest| rest.strip_prefix('.')) {
        stripped
      } else {
        continue;
      };
      let mut path = dir.clone();
      for segment in relative.split('.') {
        path.push(segment);
      }
      path.set_extension("json");
      if path.is_file() {
        return Some(path);
      }
    }
    None
  }

  fn parse(&self, class_name: &str, path: &Path) -> Result<ClassMetadata, EngineError> {
    let blob = fs::read_to_string(path).map_err(|error| EngineError::MetadataFailure {
      class:  class_name.into(),
      detail: format!("metadata file {} unreadable: {error}", path.display()),
    })?;
    let def: ClassDef = serde_json::from_str(&blob).map_err(|error| EngineError::MetadataFailure {
      class:  class_name.into(),
      detail: format!("metadata file {} malformed: {error}", path.display()),
    })?;
    let mut metadata = ClassMetadata::new(class_name);
    if let Some(parent) = def.extends {
      metadata = metadata.with_extends(parent);
    }
    if def.interface {
      metadata = metadata.as_interface();
    }
    for property in def.properties {
      metadata = metadata.with_property(property.into_metadata(self.type_parser.as_ref())?);
    }
    Ok(metadata)
  }
}

impl MetadataDriver for FileMetadataDriver {
  fn load_metadata(&self, class_name: &str) -> Result<Option<ClassMetadata>, EngineError> {
    match self.locate(class_name) {
      | Some(path) => self.parse(class_name, &path).map(Some),
      | None => Ok(None),
    }
  }
}

#[derive(Deserialize)]
struct ClassDef {
  #[serde(default)]
  extends:    Option<String>,
  #[serde(default)]
  interface:  bool,
  #[serde(default)]
  properties: Vec<PropertyDef>,
}

#[derive(Deserialize)]
struct PropertyDef {
  name:            String,
  #[serde(default, rename = "type")]
  type_ref:        Option<String>,
  #[serde(default)]
  serialized_name: Option<String>,
  #[serde(default)]
  expression:      Option<String>,
  #[serde(default = "default_true")]
  readable:        bool,
  #[serde(default = "default_true")]
  writable:        bool,
}

impl PropertyDef {
  fn into_metadata(self, type_parser: &dyn TypeParser) -> Result<PropertyMetadata, EngineError> {
    let mut property = PropertyMetadata::new(self.name);
    if let Some(type_ref) = self.type_ref {
      property = property.with_type_hint(type_parser.parse(&type_ref)?);
    }
    if let Some(name) = self.serialized_name {
      property = property.with_serialized_name(name);
    }
    if let Some(expression) = self.expression {
      property = property.with_expression(expression);
    }
    if !self.readable {
      property = property.write_only();
    }
    if !self.writable {
      property = property.read_only();
    }
    Ok(property)
  }
}

const fn default_true() -> bool {
  true
}
