//! Per-call traversal state and its factories.

/// Closure-backed factory adapter.
mod callback_context_factory;
/// Factory seam.
mod context_factory;
/// Tagged factory-or-callable configuration value.
mod context_factory_value;
/// Identity factory producing fresh default contexts.
mod default_context_factory;
/// Per-call mutable traversal state.
mod traversal_context;

pub use callback_context_factory::CallbackContextFactory;
pub use context_factory::ContextFactory;
pub use context_factory_value::ContextFactoryValue;
pub use default_context_factory::DefaultContextFactory;
pub use traversal_context::TraversalContext;
