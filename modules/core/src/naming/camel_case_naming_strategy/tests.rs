use std::sync::Arc;

use crate::{
  metadata::PropertyMetadata,
  naming::{CamelCaseNamingStrategy, PropertyNamingStrategy, SerializedNameStrategy},
};

#[test]
fn rewrites_camel_case_to_snake_case() {
  let strategy = CamelCaseNamingStrategy::new();
  assert_eq!(strategy.translate(&PropertyMetadata::new("firstName")), "first_name");
  assert_eq!(strategy.translate(&PropertyMetadata::new("createdAtMillis")), "created_at_millis");
  assert_eq!(strategy.translate(&PropertyMetadata::new("plain")), "plain");
}

#[test]
fn honors_custom_separator_and_case() {
  let strategy = CamelCaseNamingStrategy::with_separator('-', false);
  assert_eq!(strategy.translate(&PropertyMetadata::new("firstName")), "first-Name");
}

#[test]
fn serialized_name_wins_over_the_transform() {
  let strategy = SerializedNameStrategy::over(Arc::new(CamelCaseNamingStrategy::new()));
  let explicit = PropertyMetadata::new("firstName").with_serialized_name("fname");
  assert_eq!(strategy.translate(&explicit), "fname");
  assert_eq!(strategy.translate(&PropertyMetadata::new("firstName")), "first_name");
}
