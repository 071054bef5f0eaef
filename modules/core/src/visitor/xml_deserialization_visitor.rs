//! XML deserialization visitor.


use indexmap::IndexMap;

use super::deserialization_visitor::DeserializationVisitor;
use crate::{error::EngineError, graph_value::GraphValue};

/// Decodes the XML subset emitted by the matching serialization visitor.
///
/// Every scalar surfaces as a string; the deserialization navigator coerces
/// scalars against the target type hints. Elements whose children are all
/// named `entry` decode as sequences, other element children decode as maps.
#[derive(Default, Clone)]
pub struct XmlDeserializationVisitor;

impl XmlDeserializationVisitor {
  /// Creates a visitor instance.
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl DeserializationVisitor for XmlDeserializationVisitor {
  fn parse(&self, input: &str) -> Result<GraphValue, EngineError> {
    let mut cursor = XmlCursor::new(input);
    cursor.skip_whitespace();
    cursor.skip_declaration()?;
    cursor.skip_whitespace();
    let (_, value) = cursor.parse_element()?;
    cursor.skip_whitespace();
    if !cursor.at_end() {
      return Err(cursor.failure("trailing content after the document element"));
    }
    Ok(value)
  }
}

struct XmlCursor<'a> {
  rest: &'a str,
}

impl<'a> XmlCursor<'a> {
  fn new(input: &'a str) -> Self {
    Self { rest: input }
  }

  fn parse_element(&mut self) -> Result<(String, GraphValue), EngineError> {
    if !self.consume("<") {
      return Err(self.failure("expected an element"));
    }
    let name = self.take_name()?;
    self.skip_whitespace();
    if self.consume("/>") {
      return Ok((name, GraphValue::Str(String::new())));
    }
    if !self.consume(">") {
      return Err(self.failure("expected '>' after element name"));
    }
    let value = if self.rest.starts_with("</") {
      GraphValue::Str(String::new())
    } else if self.rest.starts_with('<') {
      self.parse_children()?
    } else {
      let end = self.rest.find('<').ok_or_else(|| self.failure("unterminated element text"))?;
      let (text, rest) = self.rest.split_at(end);
      self.rest = rest;
      GraphValue::Str(unescape(text)?)
    };
    if !self.consume("</") {
      return Err(self.failure("expected a closing tag"));
    }
    let closing = self.take_name()?;
    if closing != name {
      return Err(self.failure("mismatched closing tag"));
    }
    if !self.consume(">") {
      return Err(self.failure("expected '>' after closing tag name"));
    }
    Ok((name, value))
  }

  fn parse_children(&mut self) -> Result<GraphValue, EngineError> {
    let mut children: Vec<(String, GraphValue)> = Vec::new();
    while self.rest.starts_with('<') && !self.rest.starts_with("</") {
      children.push(self.parse_element()?);
    }
    if children.iter().all(|(name, _)| name == "entry") {
      return Ok(GraphValue::Seq(children.into_iter().map(|(_, value)| value).collect()));
    }
    let mut entries = IndexMap::with_capacity(children.len());
    for (name, value) in children {
      entries.insert(name, value);
    }
    Ok(GraphValue::Map(entries))
  }

  fn take_name(&mut self) -> Result<String, EngineError> {
    let end = self
      .rest
      .char_indices()
      .find(|(_, c)| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-' || *c == '.'))
      .map_or(self.rest.len(), |(index, _)| index);
    if end == 0 {
      return Err(self.failure("expected an element name"));
    }
    let (name, rest) = self.rest.split_at(end);
    self.rest = rest;
    Ok(name.into())
  }

  fn skip_declaration(&mut self) -> Result<(), EngineError> {
    if self.rest.starts_with("<?") {
      let end = self.rest.find("?>").ok_or_else(|| self.failure("unterminated XML declaration"))?;
      self.rest = &self.rest[end + 2..];
    }
    Ok(())
  }

  fn consume(&mut self, expected: &str) -> bool {
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

  fn failure(&self, detail: impl Into<String>) -> EngineError {
    EngineError::ParseFailure { format: "xml".into(), detail: detail.into() }
  }
}

fn unescape(text: &str) -> Result<String, EngineError> {
  let mut unescaped = String::with_capacity(text.len());
  let mut rest = text;
  while let Some(position) = rest.find('&') {
    unescaped.push_str(&rest[..position]);
    rest = &rest[position..];
    let end = rest
      .find(';')
      .ok_or_else(|| EngineError::ParseFailure { format: "xml".into(), detail: "unterminated entity".into() })?;
    let entity = &rest[..=end];
    unescaped.push(match entity {
      | "&amp;" => '&',
      | "&lt;" => '<',
      | "&gt;" => '>',
      | "&quot;" => '"',
      | "&apos;" => '\'',
      | other => {
        return Err(EngineError::ParseFailure { format: "xml".into(), detail: format!("unknown entity {other:?}") });
      },
    });
    rest = &rest[end + 1..];
  }
  unescaped.push_str(rest);
  Ok(unescaped)
}
