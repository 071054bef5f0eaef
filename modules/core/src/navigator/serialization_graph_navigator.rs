//! Object-to-wire graph walker.

use std::sync::Arc;

use indexmap::IndexMap;

use super::{navigation_scope::NavigationScope, nested_navigate::NestedNavigate};
use crate::{
  access::PropertyAccessor,
  context::TraversalContext,
  error::EngineError,
  event::{EventDispatcher, EventKind, ObjectEvent},
  graph_value::GraphValue,
  handler::{Direction, HandlerRegistry},
  metadata::{ClassMetadata, MetadataFactory},
  reflective::ObjectRef,
  typing::TypeHint,
};

/// Walks one object graph into its wire value, once per serialize call.
///
/// Handlers take precedence over structural navigation; objects without a
/// matching handler are enumerated property-by-property through metadata,
/// with lifecycle events dispatched around each object node.
pub struct SerializationGraphNavigator {
  metadata_factory: Arc<MetadataFactory>,
  handlers:         Arc<HandlerRegistry>,
  accessor:         Arc<dyn PropertyAccessor>,
  dispatcher:       Arc<EventDispatcher>,
  format:           String,
}

impl SerializationGraphNavigator {
  pub(crate) fn new(
    metadata_factory: Arc<MetadataFactory>,
    handlers: Arc<HandlerRegistry>,
    accessor: Arc<dyn PropertyAccessor>,
    dispatcher: Arc<EventDispatcher>,
    format: String,
  ) -> Self {
    Self { metadata_factory, handlers, accessor, dispatcher, format }
  }

  /// Navigates the root value of one serialize call.
  ///
  /// # Errors
  ///
  /// Propagates any traversal failure.
  pub fn navigate_root(&self, value: GraphValue, context: &mut TraversalContext) -> Result<GraphValue, EngineError> {
    self.navigate_value(context, value, None)
  }

  fn navigate_value(
    &self,
    context: &mut TraversalContext,
    value: GraphValue,
    hint: Option<&TypeHint>,
  ) -> Result<GraphValue, EngineError> {
    if value.is_null() {
      return Ok(GraphValue::Null);
    }
    let chain = self.dispatch_chain(&value)?;
    let is_object = matches!(value, GraphValue::Object(_));
    let type_name = chain.first().cloned().unwrap_or_default();
    let mut value = value;
    if is_object {
      self.dispatch_event(EventKind::PreSerialize, &type_name, &mut value)?;
    }
    context.push_depth();
    let navigated = if let Some(handler) = self.handlers.find(Direction::Serialization, &self.format, &chain) {
      let mut scope = NavigationScope::new(self, context, hint);
      handler.invoke(&mut scope, value)
    } else {
      self.navigate_structural(context, value, hint)
    };
    context.pop_depth();
    let mut result = navigated?;
    if is_object {
      self.dispatch_event(EventKind::PostSerialize, &type_name, &mut result)?;
    }
    Ok(result)
  }

  fn navigate_structural(
    &self,
    context: &mut TraversalContext,
    value: GraphValue,
    hint: Option<&TypeHint>,
  ) -> Result<GraphValue, EngineError> {
    match value {
      | GraphValue::Seq(elements) => {
        let element_hint = hint.map(TypeHint::element_hint);
        let mut navigated = Vec::with_capacity(elements.len());
        for element in elements {
          navigated.push(self.navigate_value(context, element, element_hint)?);
        }
        Ok(GraphValue::Seq(navigated))
      },
      | GraphValue::Map(entries) => {
        let value_hint = hint.map(TypeHint::element_hint);
        let mut navigated = IndexMap::with_capacity(entries.len());
        for (key, entry) in entries {
          navigated.insert(key, self.navigate_value(context, entry, value_hint)?);
        }
        Ok(GraphValue::Map(navigated))
      },
      | GraphValue::Object(object) => self.navigate_object(context, &object),
      | scalar => Ok(scalar),
    }
  }

  fn navigate_object(&self, context: &mut TraversalContext, object: &ObjectRef) -> Result<GraphValue, EngineError> {
    let class_name = object.class_name().to_string();
    let Some(metadata) = self.metadata_factory.metadata_for(&class_name)? else {
      return Err(EngineError::NoHandlerFound {
        type_name: class_name,
        format:    self.format.clone(),
        direction: Direction::Serialization,
      });
    };
    let identity = Arc::as_ptr(object) as *const () as usize;
    if !context.begin_object_visit(identity) {
      return Err(EngineError::CircularReference { class: class_name });
    }
    let mut entries = IndexMap::with_capacity(metadata.properties().len());
    let navigated = self.navigate_properties(context, object, &metadata, &mut entries);
    context.end_object_visit(identity);
    navigated?;
    Ok(GraphValue::Map(entries))
  }

  fn navigate_properties(
    &self,
    context: &mut TraversalContext,
    object: &ObjectRef,
    metadata: &ClassMetadata,
    entries: &mut IndexMap<String, GraphValue>,
  ) -> Result<(), EngineError> {
    for property in metadata.properties() {
      if !property.readable() {
        continue;
      }
      let raw = self.accessor.read(object.as_ref(), property)?;
      let navigated = self.navigate_value(context, raw, Some(property.type_hint()))?;
      entries.insert(property.wire_name().to_string(), navigated);
    }
    Ok(())
  }

  fn dispatch_chain(&self, value: &GraphValue) -> Result<Vec<String>, EngineError> {
    match value {
      | GraphValue::Object(object) => self.metadata_factory.ancestry(object.class_name()),
      | other => Ok(vec![other.kind_name().to_string()]),
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

impl NestedNavigate for SerializationGraphNavigator {
  fn navigate_nested(
    &self,
    context: &mut TraversalContext,
    value: GraphValue,
    hint: Option<&TypeHint>,
  ) -> Result<GraphValue, EngineError> {
    self.navigate_value(context, value, hint)
  }
}
