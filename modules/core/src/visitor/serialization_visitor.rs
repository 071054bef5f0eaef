//! Serialization visitor seam.

use crate::error::EngineError;

/// Receives a stream of structural events and renders the wire text.
///
/// The navigator produces a fully-resolved wire value first; the engine then
/// walks it through [`drive`](super::drive), so visitors only ever see
/// scalars, sequences and named properties.
pub trait SerializationVisitor {
  /// Renders an absent value.
  ///
  /// # Errors
  ///
  /// Returns [`EngineError::VisitFailure`] when the event is invalid here.
  fn visit_null(&mut self) -> Result<(), EngineError>;

  /// Renders a boolean scalar.
  ///
  /// # Errors
  ///
  /// Returns [`EngineError::VisitFailure`] when the event is invalid here.
  fn visit_bool(&mut self, value: bool) -> Result<(), EngineError>;

  /// Renders an integer scalar.
  ///
  /// # Errors
  ///
  /// Returns [`EngineError::VisitFailure`] when the event is invalid here.
  fn visit_int(&mut self, value: i64) -> Result<(), EngineError>;

  /// Renders a floating point scalar.
  ///
  /// # Errors
  ///
  /// Returns [`EngineError::VisitFailure`] when the value cannot be encoded.
  fn visit_float(&mut self, value: f64) -> Result<(), EngineError>;

  /// Renders a textual scalar.
  ///
  /// # Errors
  ///
  /// Returns [`EngineError::VisitFailure`] when the event is invalid here.
  fn visit_str(&mut self, value: &str) -> Result<(), EngineError>;

  /// Opens an object node.
  ///
  /// # Errors
  ///
  /// Returns [`EngineError::VisitFailure`] when the event is invalid here.
  fn begin_object(&mut self) -> Result<(), EngineError>;

  /// Names the next property inside the current object.
  ///
  /// # Errors
  ///
  /// Returns [`EngineError::VisitFailure`] when no object is open.
  fn property_name(&mut self, name: &str) -> Result<(), EngineError>;

  /// Closes the current object node.
  ///
  /// # Errors
  ///
  /// Returns [`EngineError::VisitFailure`] when no object is open.
  fn end_object(&mut self) -> Result<(), EngineError>;

  /// Opens a sequence node.
  ///
  /// # Errors
  ///
  /// Returns [`EngineError::VisitFailure`] when the event is invalid here.
  fn begin_seq(&mut self) -> Result<(), EngineError>;

  /// Closes the current sequence node.
  ///
  /// # Errors
  ///
  /// Returns [`EngineError::VisitFailure`] when no sequence is open.
  fn end_seq(&mut self) -> Result<(), EngineError>;

  /// Finishes the visit and returns the rendered text.
  ///
  /// # Errors
  ///
  /// Returns [`EngineError::VisitFailure`] when the event stream was left
  /// incomplete.
  fn into_output(self: Box<Self>) -> Result<String, EngineError>;
}
