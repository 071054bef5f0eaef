//! Property access strategies.

/// Direct named-property access.
mod direct_property_accessor;
/// Expression-aware accessor decorator.
mod expression_accessor;
/// Expression evaluation seam.
mod expression_evaluator;
/// Accessor strategy seam.
mod property_accessor;

pub use direct_property_accessor::DirectPropertyAccessor;
pub use expression_accessor::ExpressionAccessor;
pub use expression_evaluator::ExpressionEvaluator;
pub use property_accessor::PropertyAccessor;
