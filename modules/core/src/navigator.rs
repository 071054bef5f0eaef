//! Per-call graph navigators and their factories.

/// Wire-to-object graph walker.
mod deserialization_graph_navigator;
/// Per-call factory for deserialization navigators.
mod deserialization_navigator_factory;
/// Re-entry surface handed to handlers.
mod navigation_scope;
/// Nested navigation seam shared by both directions.
mod nested_navigate;
/// Object-to-wire graph walker.
mod serialization_graph_navigator;
/// Per-call factory for serialization navigators.
mod serialization_navigator_factory;

pub use deserialization_graph_navigator::DeserializationGraphNavigator;
pub use deserialization_navigator_factory::DeserializationNavigatorFactory;
pub use navigation_scope::NavigationScope;
pub use nested_navigate::NestedNavigate;
pub use serialization_graph_navigator::SerializationGraphNavigator;
pub use serialization_navigator_factory::SerializationNavigatorFactory;
