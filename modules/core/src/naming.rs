//! Property naming strategies.

/// camelCase to separator-delimited transformer.
mod camel_case_naming_strategy;
/// Naming strategy seam.
mod property_naming_strategy;
/// Explicit serialized-name aware wrapper (the default strategy).
mod serialized_name_strategy;

pub use camel_case_naming_strategy::CamelCaseNamingStrategy;
pub use property_naming_strategy::PropertyNamingStrategy;
pub use serialized_name_strategy::SerializedNameStrategy;
