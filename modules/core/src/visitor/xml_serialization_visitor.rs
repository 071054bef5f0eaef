//! XML serialization visitor.


use std::fmt::Write as _;

use super::serialization_visitor::SerializationVisitor;
use crate::error::EngineError;

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Renders the event stream as a compact XML document.
///
/// The root element is `<result>`, sequence items are `<entry>` elements and
/// object members use their wire names as element names. XML carries no
/// scalar types; deserialization recovers them from the target type hints.
#[derive(Default)]
pub struct XmlSerializationVisitor {
  out:          String,
  stack:        Vec<String>,
  pending_name: Option<String>,
  seq_depths:   Vec<bool>,
  has_root:     bool,
}

impl XmlSerializationVisitor {
  /// Creates a visitor for one document.
  #[must_use]
  pub fn new() -> Self {
    Self { out: String::new(), stack: Vec::new(), pending_name: None, seq_depths: Vec::new(), has_root: false }
  }

  fn next_element_name(&mut self) -> String {
    if let Some(name) = self.pending_name.take() {
      return name;
    }
    if self.seq_depths.last().copied().unwrap_or(false) {
      return "entry".into();
    }
    "result".into()
  }

  fn scalar(&mut self, text: &str) -> Result<(), EngineError> {
    let name = self.next_element_name();
    let _ = write!(self.out, "<{name}>{}</{name}>", escape(text));
    self.mark_root();
    Ok(())
  }

  fn open(&mut self, is_seq: bool) {
    let name = self.next_element_name();
    let _ = write!(self.out, "<{name}>");
    self.stack.push(name);
    self.seq_depths.push(is_seq);
  }

  fn close(&mut self) -> Result<(), EngineError> {
    let name = self
      .stack
      .pop()
      .ok_or_else(|| EngineError::VisitFailure { detail: "close event without a matching open".into() })?;
    self.seq_depths.pop();
    let _ = write!(self.out, "</{name}>");
    self.mark_root();
    Ok(())
  }

  fn mark_root(&mut self) {
    if self.stack.is_empty() {
      self.has_root = true;
    }
  }
}

impl SerializationVisitor for XmlSerializationVisitor {
  fn visit_null(&mut self) -> Result<(), EngineError> {
    let name = self.next_element_name();
    let _ = write!(self.out, "<{name}/>");
    self.mark_root();
    Ok(())
  }

  fn visit_bool(&mut self, value: bool) -> Result<(), EngineError> {
    self.scalar(if value { "true" } else { "false" })
  }

  fn visit_int(&mut self, value: i64) -> Result<(), EngineError> {
    self.scalar(&value.to_string())
  }

  fn visit_float(&mut self, value: f64) -> Result<(), EngineError> {
    if !value.is_finite() {
      return Err(EngineError::VisitFailure { detail: format!("non-finite float {value} is not representable") });
    }
    self.scalar(&value.to_string())
  }

  fn visit_str(&mut self, value: &str) -> Result<(), EngineError> {
    self.scalar(value)
  }

  fn begin_object(&mut self) -> Result<(), EngineError> {
    self.open(false);
    Ok(())
  }

  fn property_name(&mut self, name: &str) -> Result<(), EngineError> {
    if self.stack.is_empty() {
      return Err(EngineError::VisitFailure { detail: "property name outside of an object".into() });
    }
    if self.pending_name.replace(name.into()).is_some() {
      return Err(EngineError::VisitFailure { detail: "property name followed by another name".into() });
    }
    Ok(())
  }

  fn end_object(&mut self) -> Result<(), EngineError> {
    self.close()
  }

  fn begin_seq(&mut self) -> Result<(), EngineError> {
    self.open(true);
    Ok(())
  }

  fn end_seq(&mut self) -> Result<(), EngineError> {
    self.close()
  }

  fn into_output(self: Box<Self>) -> Result<String, EngineError> {
    if !self.stack.is_empty() {
      return Err(EngineError::VisitFailure { detail: "document finished with unclosed elements".into() });
    }
    if !self.has_root {
      return Err(EngineError::VisitFailure { detail: "no value was visited".into() });
    }
    let mut document = String::with_capacity(XML_DECLARATION.len() + self.out.len());
    document.push_str(XML_DECLARATION);
    document.push_str(&self.out);
    Ok(document)
  }
}

/// Escapes the five XML metacharacters.
pub(crate) fn escape(text: &str) -> String {
  let mut escaped = String::with_capacity(text.len());
  for c in text.chars() {
    match c {
      | '&' => escaped.push_str("&amp;"),
      | '<' => escaped.push_str("&lt;"),
      | '>' => escaped.push_str("&gt;"),
      | '"' => escaped.push_str("&quot;"),
      | '\'' => escaped.push_str("&apos;"),
      | other => escaped.push(other),
    }
  }
  escaped
}
