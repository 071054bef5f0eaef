//! Deserialization visitor seam.

use crate::{error::EngineError, graph_value::GraphValue};

/// Decodes wire text into the neutral value tree.
pub trait DeserializationVisitor {
  /// Parses one document.
  ///
  /// # Errors
  ///
  /// Returns [`EngineError::ParseFailure`] on malformed input.
  fn parse(&self, input: &str) -> Result<GraphValue, EngineError>;
}
