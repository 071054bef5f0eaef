//! Format visitors and their factories.

/// Deserialization visitor seam.
mod deserialization_visitor;
/// Tree walker feeding a serialization visitor.
mod drive;
/// JSON deserialization visitor.
mod json_deserialization_visitor;
/// JSON serialization visitor.
mod json_serialization_visitor;
/// Serialization visitor seam.
mod serialization_visitor;
/// Factory aliases for the per-format visitor tables.
mod visitor_factories;
/// XML deserialization visitor.
mod xml_deserialization_visitor;
/// XML serialization visitor.
mod xml_serialization_visitor;

pub use deserialization_visitor::DeserializationVisitor;
pub use drive::drive;
pub use json_deserialization_visitor::JsonDeserializationVisitor;
pub use json_serialization_visitor::JsonSerializationVisitor;
pub use serialization_visitor::SerializationVisitor;
pub use visitor_factories::{DeserializationVisitorFactory, SerializationVisitorFactory};
pub use xml_deserialization_visitor::XmlDeserializationVisitor;
pub use xml_serialization_visitor::XmlSerializationVisitor;
