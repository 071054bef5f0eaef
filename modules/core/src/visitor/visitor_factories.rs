//! Factory aliases for the per-format visitor tables.

use std::sync::Arc;

use super::{deserialization_visitor::DeserializationVisitor, serialization_visitor::SerializationVisitor};

/// Produces a fresh serialization visitor for one call.
pub type SerializationVisitorFactory = Arc<dyn Fn() -> Box<dyn SerializationVisitor> + Send + Sync>;

/// Produces a fresh deserialization visitor for one call.
pub type DeserializationVisitorFactory = Arc<dyn Fn() -> Box<dyn DeserializationVisitor> + Send + Sync>;
