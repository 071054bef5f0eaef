//! Textual type references and their parsed form.

/// Recursive-descent parser for the default type grammar.
mod default_type_parser;
/// Parsed type reference consumed by navigators and drivers.
mod type_hint;
/// Parsing strategy seam.
mod type_parser;

pub use default_type_parser::DefaultTypeParser;
pub use type_hint::TypeHint;
pub use type_parser::TypeParser;
