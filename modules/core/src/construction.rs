//! Instance construction strategies for deserialization.

/// Registry-instantiator backed default strategy.
mod default_object_constructor;
/// Construction strategy seam.
mod object_constructor;

pub use default_object_constructor::DefaultObjectConstructor;
pub use object_constructor::ObjectConstructor;
