//! Traversal-time errors.

use crate::handler::Direction;

/// Errors surfaced by serialize/deserialize calls.
///
/// Traversal errors are per-call and never corrupt the shared engine state;
/// subsequent calls against the same engine are unaffected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
  /// No visitor factory is registered for the requested format.
  #[error("no {direction} visitor registered for format {format:?}")]
  UnsupportedFormat {
    /// Requested wire format.
    format:    String,
    /// Direction of the failing call.
    direction: Direction,
  },
  /// Metadata lookup failed to resolve a class.
  #[error("no metadata available for type {class:?}")]
  UnresolvedType {
    /// Class name that could not be resolved.
    class: String,
  },
  /// Neither a handler nor structural metadata could process a node.
  #[error("no {direction} handler found for type {type_name:?} and format {format:?}")]
  NoHandlerFound {
    /// Type name of the unprocessable node.
    type_name: String,
    /// Requested wire format.
    format:    String,
    /// Direction of the failing call.
    direction: Direction,
  },
  /// The object graph contains a reference cycle.
  #[error("circular reference detected while serializing {class:?}")]
  CircularReference {
    /// Class at which the cycle was re-entered.
    class: String,
  },
  /// A property named by metadata is not exposed by the instance.
  #[error("type {class:?} has no property {property:?}")]
  UnknownProperty {
    /// Class owning the property.
    class:    String,
    /// Property that was requested.
    property: String,
  },
  /// The object constructor has no way to instantiate the class.
  #[error("type {class:?} cannot be constructed")]
  NotConstructible {
    /// Class that could not be instantiated.
    class: String,
  },
  /// A node had a value shape incompatible with its target.
  #[error("expected {expected} but found {found}")]
  UnexpectedValue {
    /// Shape required by the hint or handler.
    expected: String,
    /// Shape actually encountered.
    found:    String,
  },
  /// The metadata pipeline failed at traversal time.
  #[error("metadata resolution failed for {class:?}: {detail}")]
  MetadataFailure {
    /// Class whose metadata was being resolved.
    class:  String,
    /// Failure description.
    detail: String,
  },
  /// Input text could not be decoded by the deserialization visitor.
  #[error("malformed {format} input: {detail}")]
  ParseFailure {
    /// Wire format of the input.
    format: String,
    /// Failure description.
    detail: String,
  },
  /// A serialization visitor rejected the event stream.
  #[error("visitor failure: {detail}")]
  VisitFailure {
    /// Failure description.
    detail: String,
  },
  /// A textual type reference could not be parsed.
  #[error("invalid type expression {expression:?}: {detail}")]
  InvalidTypeExpression {
    /// Offending type expression.
    expression: String,
    /// Failure description.
    detail:     String,
  },
  /// An accessor expression could not be evaluated.
  #[error("expression {expression:?} failed to evaluate: {detail}")]
  ExpressionFailure {
    /// Offending accessor expression.
    expression: String,
    /// Failure description.
    detail:     String,
  },
}
