//! Default type expression parser.


use super::{type_hint::TypeHint, type_parser::TypeParser};
use crate::error::EngineError;

/// Recursive-descent parser for `name` and `name<arg, ...>` expressions.
///
/// Identifiers are dotted alphanumeric names. Well-known names map onto the
/// built-in [`TypeHint`] variants; anything else becomes a class hint.
#[derive(Default, Clone)]
pub struct DefaultTypeParser;

impl DefaultTypeParser {
  /// Creates a new parser instance.
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl TypeParser for DefaultTypeParser {
  fn parse(&self, expression: &str) -> Result<TypeHint, EngineError> {
    let mut cursor = Cursor::new(expression);
    let hint = cursor.parse_type()?;
    cursor.skip_whitespace();
    if !cursor.at_end() {
      return Err(cursor.error("trailing input after type"));
    }
    Ok(hint)
  }
}

struct Cursor<'a> {
  source: &'a str,
  rest:   &'a str,
}

impl<'a> Cursor<'a> {
  fn new(source: &'a str) -> Self {
    Self { source, rest: source }
  }

  fn parse_type(&mut self) -> Result<TypeHint, EngineError> {
    self.skip_whitespace();
    let name = self.take_identifier()?;
    self.skip_whitespace();
    let arguments = if self.consume('<') {
      let mut arguments = vec![self.parse_type()?];
      self.skip_whitespace();
      while self.consume(',') {
        arguments.push(self.parse_type()?);
        self.skip_whitespace();
      }
      if !self.consume('>') {
        return Err(self.error("expected '>' to close type arguments"));
      }
      arguments
    } else {
      Vec::new()
    };
    Self::resolve(name, arguments).map_err(|detail| self.error(detail))
  }

  fn resolve(name: &str, mut arguments: Vec<TypeHint>) -> Result<TypeHint, &'static str> {
    let parameterized = !arguments.is_empty();
    let hint = match name {
      | "any" | "mixed" => TypeHint::Any,
      | "bool" | "boolean" => TypeHint::Bool,
      | "int" | "integer" => TypeHint::Int,
      | "float" | "double" => TypeHint::Float,
      | "string" | "str" => TypeHint::Str,
      | "datetime" => TypeHint::DateTime,
      | "collection" | "array" => {
        if arguments.len() > 1 {
          return Err("collections take at most one type argument");
        }
        return Ok(TypeHint::Collection(arguments.pop().map(Box::new)));
      },
      | "map" => {
        if arguments.len() > 1 {
          return Err("maps take at most one value type argument");
        }
        return Ok(TypeHint::Map(arguments.pop().map(Box::new)));
      },
      | class => {
        if parameterized {
          return Err("class types take no type arguments");
        }
        return Ok(TypeHint::Class(class.into()));
      },
    };
    if parameterized {
      return Err("scalar types take no type arguments");
    }
    Ok(hint)
  }

  fn take_identifier(&mut self) -> Result<&'a str, EngineError> {
    let end = self
      .rest
      .char_indices()
      .find(|(_, c)| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '.'))
      .map_or(self.rest.len(), |(index, _)| index);
    if end == 0 {
      return Err(self.error("expected a type name"));
    }
    let (name, rest) = self.rest.split_at(end);
    self.rest = rest;
    Ok(name)
  }

  fn consume(&mut self, expected: char) -> bool {
    if let Some(stripped) = self.rest.strip_prefix(expected) {
      self.rest = stripped;
      return true;
    }
    false
  }

  fn skip_whitespace(&mut self) {
    self.rest = self.rest.trim_start();
  }

  fn at_end(&self) -> bool {
    self.rest.is_empty()
  }

  fn error(&self, detail: impl Into<String>) -> EngineError {
    EngineError::InvalidTypeExpression { expression: self.source.into(), detail: detail.into() }
  }
}
