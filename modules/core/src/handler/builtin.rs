//! Built-in handler set.

/// RFC 3339 date/time conversion.
mod date_time_handler;
/// Array-like collection re-navigation.
mod iterable_handler;
/// Untyped map re-navigation.
mod plain_map_handler;

pub use date_time_handler::DateTimeHandler;
pub use iterable_handler::IterableHandler;
pub use plain_map_handler::PlainMapHandler;
