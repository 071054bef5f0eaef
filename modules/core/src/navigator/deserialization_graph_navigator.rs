//! Wire-to-object graph walker.

use std::sync::Arc;

use indexmap::IndexMap;

use super::{navigation_scope::NavigationScope, nested_navigate::NestedNavigate};
use crate::{
  access::PropertyAccessor,
  construction::ObjectConstructor,
  context::TraversalContext,
  error::EngineError,
  event::{EventDispatcher, EventKind, ObjectEvent},
  graph_value::GraphValue,
  handler::{Direction, HandlerRegistry},
  metadata::MetadataFactory,
  typing::TypeHint,
};

static ANY_HINT: TypeHint = TypeHint::Any;

/// Walks one wire value into a populated object graph, once per
/// deserialize call.
///
/// Handlers take precedence over structural navigation; class targets are
/// constructed through the object constructor and populated property-by-
/// property through metadata and the accessor strategy, with lifecycle
/// events dispatched around each class node. Scalar coercion recovers typed
/// values from formats that surface everything as text.
pub struct DeserializationGraphNavigator {
  metadata_factory: Arc<MetadataFactory>,
  handlers:         Arc<HandlerRegistry>,
  accessor:         Arc<dyn PropertyAccessor>,
  dispatcher:       Arc<EventDispatcher>,
  constructor:      Arc<dyn ObjectConstructor>,
  format:           String,
}

impl DeserializationGraphNavigator {
  pub(crate) fn new(
    metadata_factory: Arc<MetadataFactory>,
    handlers: Arc<HandlerRegistry>,
    accessor: Arc<dyn PropertyAccessor>,
    dispatcher: Arc<EventDispatcher>,
    constructor: Arc<dyn ObjectConstructor>,
    format: String,
  ) -> Self {
    Self { metadata_factory, handlers, accessor, dispatcher, constructor, format }
  }

  /// Navigates the root value of one deserialize call.
  ///
  /// # Errors
  ///
  /// Propagates any traversal failure.
  pub fn navigate_root(
    &self,
    wire: GraphValue,
    hint: &TypeHint,
    context: &mut TraversalContext,
  ) -> Result<GraphValue, EngineError> {
    self.navigate_value(context, wire, hint)
  }

  fn navigate_value(
    &self,
    context: &mut TraversalContext,
    wire: GraphValue,
    hint: &TypeHint,
  ) -> Result<GraphValue, EngineError> {
    let chain = self.dispatch_chain(&wire, hint)?;
    let is_class = matches!(hint, TypeHint::Class(_));
    let type_name = chain.first().cloned().unwrap_or_default();
    let mut wire = wire;
    if is_class {
      self.dispatch_event(EventKind::PreDeserialize, &type_name, &mut wire)?;
    }
    context.push_depth();
    let navigated = if let Some(handler) = self.handlers.find(Direction::Deserialization, &self.format, &chain) {
      let mut scope = NavigationScope::new(self, context, Some(hint));
      handler.invoke(&mut scope, wire)
    } else {
      self.navigate_structural(context, wire, hint)
    };
    context.pop_depth();
    let mut result = navigated?;
    if is_class {
      self.dispatch_event(EventKind::PostDeserialize, &type_name, &mut result)?;
    }
    Ok(result)
  }

  fn navigate_structural(
    &self,
    context: &mut TraversalContext,
    wire: GraphValue,
    hint: &TypeHint,
  ) -> Result<GraphValue, EngineError> {
    match hint {
      | TypeHint::Any => Ok(wire),
      | TypeHint::Bool | TypeHint::Int | TypeHint::Float | TypeHint::Str => coerce_scalar(wire, hint),
      | TypeHint::DateTime => match wire {
        | GraphValue::Null => Ok(GraphValue::Null),
        | GraphValue::DateTime(instant) => Ok(GraphValue::DateTime(instant)),
        | other => {
          Err(EngineError::UnexpectedValue { expected: "a datetime value".into(), found: other.kind_name().into() })
        },
      },
      | TypeHint::Collection(element) => match wire {
        | GraphValue::Null => Ok(GraphValue::Null),
        | GraphValue::Seq(elements) => {
          let element_hint = element.as_deref().unwrap_or(&ANY_HINT);
          let mut navigated = Vec::with_capacity(elements.len());
          for entry in elements {
            navigated.push(self.navigate_value(context, entry, element_hint)?);
          }
          Ok(GraphValue::Seq(navigated))
        },
        | other => Err(EngineError::UnexpectedValue { expected: "a sequence".into(), found: other.kind_name().into() }),
      },
      | TypeHint::Map(value_hint) => match wire {
        | GraphValue::Null => Ok(GraphValue::Null),
        | GraphValue::Map(entries) => {
          let value_hint = value_hint.as_deref().unwrap_or(&ANY_HINT);
          let mut navigated = IndexMap::with_capacity(entries.len());
          for (key, entry) in entries {
            navigated.insert(key, self.navigate_value(context, entry, value_hint)?);
          }
          Ok(GraphValue::Map(navigated))
        },
        | other => Err(EngineError::UnexpectedValue { expected: "a map".into(), found: other.kind_name().into() }),
      },
      | TypeHint::Class(class_name) => self.navigate_class(context, wire, class_name),
    }
  }

  fn navigate_class(
    &self,
    context: &mut TraversalContext,
    wire: GraphValue,
    class_name: &str,
  ) -> Result<GraphValue, EngineError> {
    if wire.is_null() {
      return Ok(GraphValue::Null);
    }
    let Some(metadata) = self.metadata_factory.metadata_for(class_name)? else {
      return Err(EngineError::UnresolvedType { class: class_name.into() });
    };
    let entries = match wire {
      | GraphValue::Map(entries) => entries,
      | other => {
        return Err(EngineError::UnexpectedValue { expected: "an object node".into(), found: other.kind_name().into() });
      },
    };
    let mut instance = self.constructor.construct(&metadata)?;
    for property in metadata.properties() {
      if !property.writable() {
        continue;
      }
      let Some(raw) = entries.get(property.wire_name()) else {
        continue;
      };
      let value = self.navigate_value(context, raw.clone(), property.type_hint())?;
      self.accessor.write(instance.as_mut(), property, value)?;
    }
    Ok(GraphValue::Object(Arc::from(instance)))
  }

  fn dispatch_chain(&self, wire: &GraphValue, hint: &TypeHint) -> Result<Vec<String>, EngineError> {
    match hint {
      | TypeHint::Class(class_name) => self.metadata_factory.ancestry(class_name),
      | TypeHint::Any => Ok(vec![wire.kind_name().to_string()]),
      | other => Ok(vec![other.dispatch_name().to_string()]),
    }
  }

  fn dispatch_event(&self, kind: EventKind, type_name: &str, value: &mut GraphValue) -> Result<(), EngineError> {
    if self.dispatcher.is_empty() {
      return Ok(());
    }
    let mut event = ObjectEvent::new(kind, type_name, &self.format, value);
    self.dispatcher.dispatch(&mut event)
  }
}

impl NestedNavigate for DeserializationGraphNavigator {
  fn navigate_nested(
    &self,
    context: &mut TraversalContext,
    value: GraphValue,
    hint: Option<&TypeHint>,
  ) -> Result<GraphValue, EngineError> {
    self.navigate_value(context, value, hint.unwrap_or(&ANY_HINT))
  }
}

fn coerce_scalar(wire: GraphValue, hint: &TypeHint) -> Result<GraphValue, EngineError> {
  let unexpected = |hint: &TypeHint, found: &GraphValue| EngineError::UnexpectedValue {
    expected: format!("a {} scalar", hint.dispatch_name()),
    found:    found.kind_name().into(),
  };
  match (hint, wire) {
    | (_, GraphValue::Null) => Ok(GraphValue::Null),
    | (TypeHint::Bool, GraphValue::Bool(value)) => Ok(GraphValue::Bool(value)),
    | (TypeHint::Bool, GraphValue::Str(text)) => match text.as_str() {
      | "true" | "1" => Ok(GraphValue::Bool(true)),
      | "false" | "0" => Ok(GraphValue::Bool(false)),
      | _ => Err(unexpected(hint, &GraphValue::Str(text))),
    },
    | (TypeHint::Int, GraphValue::Int(value)) => Ok(GraphValue::Int(value)),
    | (TypeHint::Int, GraphValue::Str(text)) => match text.parse::<i64>() {
      | Ok(value) => Ok(GraphValue::Int(value)),
      | Err(_) => Err(unexpected(hint, &GraphValue::Str(text))),
    },
    | (TypeHint::Float, GraphValue::Float(value)) => Ok(GraphValue::Float(value)),
    | (TypeHint::Float, GraphValue::Int(value)) => Ok(GraphValue::Float(value as f64)),
    | (TypeHint::Float, GraphValue::Str(text)) => match text.parse::<f64>() {
      | Ok(value) => Ok(GraphValue::Float(value)),
      | Err(_) => Err(unexpected(hint, &GraphValue::Str(text))),
    },
    | (TypeHint::Str, GraphValue::Str(text)) => Ok(GraphValue::Str(text)),
    | (_, other) => Err(unexpected(hint, &other)),
  }
}
