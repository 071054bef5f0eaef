use std::{fs, sync::Arc};

use crate::{
  error::EngineError,
  metadata::{FileMetadataDriver, MetadataDriver},
  typing::{DefaultTypeParser, TypeHint},
};

fn driver_for(dirs: Vec<(String, std::path::PathBuf)>) -> FileMetadataDriver {
  FileMetadataDriver::new(dirs, Arc::new(DefaultTypeParser::new()))
}

#[test]
fn loads_declarations_through_the_catch_all_prefix() {
  let dir = tempfile::tempdir().expect("tempdir");
  let nested = dir.path().join("app").join("model");
  fs::create_dir_all(&nested).expect("nested dirs");
  fs::write(
    nested.join("Point.json"),
    r#"{"properties": [{"name": "x", "type": "int"}, {"name": "label", "type": "string"}]}"#,
  )
  .expect("metadata file");

  let driver = driver_for(vec![(String::new(), dir.path().to_path_buf())]);
  let metadata = driver.load_metadata("app.model.Point").expect("load").expect("declared");
  assert_eq!(metadata.class_name(), "app.model.Point");
  assert_eq!(metadata.properties().len(), 2);
  assert_eq!(metadata.properties()[0].type_hint(), &TypeHint::Int);
}

#[test]
fn longer_prefixes_win_over_the_catch_all() {
  let catch_all = tempfile::tempdir().expect("catch-all dir");
  let scoped = tempfile::tempdir().expect("scoped dir");
  fs::write(scoped.path().join("Point.json"), r#"{"properties": [{"name": "scoped"}]}"#).expect("scoped file");
  fs::create_dir_all(catch_all.path().join("app")).expect("app dir");
  fs::write(catch_all.path().join("app").join("Point.json"), r#"{"properties": [{"name": "fallback"}]}"#)
    .expect("fallback file");

  let driver = driver_for(vec![
    (String::new(), catch_all.path().to_path_buf()),
    ("app".into(), scoped.path().to_path_buf()),
  ]);
  let metadata = driver.load_metadata("app.Point").expect("load").expect("declared");
  assert_eq!(metadata.properties()[0].name(), "scoped");
}

#[test]
fn undeclared_classes_load_as_none() {
  let dir = tempfile::tempdir().expect("tempdir");
  let driver = driver_for(vec![(String::new(), dir.path().to_path_buf())]);
  assert!(driver.load_metadata("app.Missing").expect("load").is_none());
}

#[test]
fn malformed_files_fail_with_metadata_errors() {
  let dir = tempfile::tempdir().expect("tempdir");
  fs::write(dir.path().join("Broken.json"), "{ not json").expect("broken file");
  let driver = driver_for(vec![(String::new(), dir.path().to_path_buf())]);
  let error = driver.load_metadata("Broken").expect_err("malformed");
  assert!(matches!(error, EngineError::MetadataFailure { .. }));
}

#[test]
fn declared_flags_and_names_survive_parsing() {
  let dir = tempfile::tempdir().expect("tempdir");
  fs::write(
    dir.path().join("Account.json"),
    r#"{
      "extends": "Base",
      "properties": [
        {"name": "secret", "readable": false},
        {"name": "displayName", "serialized_name": "display", "type": "string"},
        {"name": "computed", "expression": "object.total", "writable": false}
      ]
    }"#,
  )
  .expect("metadata file");
  let driver = driver_for(vec![(String::new(), dir.path().to_path_buf())]);
  let metadata = driver.load_metadata("Account").expect("load").expect("declared");
  assert_eq!(metadata.extends(), Some("Base"));
  assert!(!metadata.properties()[0].readable());
  assert_eq!(metadata.properties()[1].serialized_name(), Some("display"));
  assert_eq!(metadata.properties()[2].expression(), Some("object.total"));
  assert!(!metadata.properties()[2].writable());
}
