//! Error taxonomy split by lifecycle stage.

/// Build-time resource creation failures.
mod build_error;
/// Configuration-time validation failures.
mod config_error;
/// Traversal-time failures surfaced from serialize/deserialize calls.
mod engine_error;

pub use build_error::BuildError;
pub use config_error::ConfigError;
pub use engine_error::EngineError;
