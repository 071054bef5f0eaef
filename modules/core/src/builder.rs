//! Fluent builder assembling the serialization engine.


use std::{
  fs,
  path::{Path, PathBuf},
  sync::Arc,
};

use hashbrown::HashMap;

use crate::{
  access::{DirectPropertyAccessor, ExpressionAccessor, ExpressionEvaluator, PropertyAccessor},
  construction::{DefaultObjectConstructor, ObjectConstructor},
  context::{ContextFactory, ContextFactoryValue, DefaultContextFactory},
  error::{BuildError, ConfigError},
  event::{EventDispatcher, EventSubscriber, TraversalLogSubscriber},
  handler::{
    builtin::{DateTimeHandler, IterableHandler, PlainMapHandler},
    Direction, HandlerFn, HandlerRegistry, SubscribingHandler,
  },
  metadata::{
    CachedDescriptorReader, DefaultDriverFactory, Describe, DescriptorReader, DescriptorRegistry, DriverFactory,
    FileMetadataCache, MetadataFactory, RegistryDescriptorReader,
  },
  naming::{CamelCaseNamingStrategy, PropertyNamingStrategy, SerializedNameStrategy},
  navigator::{DeserializationNavigatorFactory, SerializationNavigatorFactory},
  reflective::Reflective,
  serializer::Serializer,
  typing::{DefaultTypeParser, TypeParser},
  visitor::{
    DeserializationVisitorFactory, JsonDeserializationVisitor, JsonSerializationVisitor, SerializationVisitorFactory,
    XmlDeserializationVisitor, XmlSerializationVisitor,
  },
};

const ANNOTATIONS_SUBTREE: &str = "annotations";
const METADATA_SUBTREE: &str = "metadata";

/// Accumulates configuration and resolves it into an immutable [`Serializer`].
///
/// Configuration calls may arrive in any order; `build()` is the single
/// point where defaults are substituted for anything left unset. Every slot
/// guarded by a "configured" flag follows the default-once policy: touching
/// the slot at all, even with an empty payload, suppresses its built-in
/// default.
///
/// The builder is not safe for concurrent configuration. A single builder
/// can produce several engines; each `build()` freezes a snapshot, so later
/// mutation never reaches an engine that was already built.
pub struct SerializerBuilder {
  metadata_dirs:                   HashMap<String, PathBuf>,
  descriptor_registry:             DescriptorRegistry,
  handler_registry:                HandlerRegistry,
  dispatcher:                      EventDispatcher,
  serialization_visitors:          HashMap<String, SerializationVisitorFactory>,
  deserialization_visitors:        HashMap<String, DeserializationVisitorFactory>,
  handlers_configured:             bool,
  listeners_configured:            bool,
  visitors_added:                  bool,
  cache_dir:                       Option<PathBuf>,
  debug:                           bool,
  include_interface_metadata:      bool,
  descriptor_reader:               Option<Arc<dyn DescriptorReader>>,
  type_parser:                     Option<Arc<dyn TypeParser>>,
  naming_strategy:                 Option<Arc<dyn PropertyNamingStrategy>>,
  driver_factory:                  Option<Arc<dyn DriverFactory>>,
  accessor:                        Option<Arc<dyn PropertyAccessor>>,
  resolved_accessor:               Option<Arc<dyn PropertyAccessor>>,
  expression_evaluator:            Option<Arc<dyn ExpressionEvaluator>>,
  object_constructor:              Option<Arc<dyn ObjectConstructor>>,
  serialization_context_factory:   Option<Arc<dyn ContextFactory>>,
  deserialization_context_factory: Option<Arc<dyn ContextFactory>>,
}

impl std::fmt::Debug for SerializerBuilder {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("SerializerBuilder")
      .field("metadata_dirs", &self.metadata_dirs)
      .field("debug", &self.debug)
      .field("include_interface_metadata", &self.include_interface_metadata)
      .finish_non_exhaustive()
  }
}

impl SerializerBuilder {
  /// Creates an empty builder.
  #[must_use]
  pub fn new() -> Self {
    Self {
      metadata_dirs:                   HashMap::new(),
      descriptor_registry:             DescriptorRegistry::new(),
      handler_registry:                HandlerRegistry::new(),
      dispatcher:                      EventDispatcher::new(),
      serialization_visitors:          HashMap::new(),
      deserialization_visitors:        HashMap::new(),
      handlers_configured:             false,
      listeners_configured:            false,
      visitors_added:                  false,
      cache_dir:                       None,
      debug:                           false,
      include_interface_metadata:      false,
      descriptor_reader:               None,
      type_parser:                     None,
      naming_strategy:                 None,
      driver_factory:                  None,
      accessor:                        None,
      resolved_accessor:               None,
      expression_evaluator:            None,
      object_constructor:              None,
      serialization_context_factory:   None,
      deserialization_context_factory: None,
    }
  }

  /// Registers a described type with the default descriptor source.
  #[must_use]
  pub fn register_type<T>(mut self) -> Self
  where
    T: Describe + Reflective + Default, {
    self.descriptor_registry.register::<T>();
    self
  }

  /// Enables debug mode: caches revalidate eagerly against their sources.
  #[must_use]
  pub const fn set_debug(mut self, debug: bool) -> Self {
    self.debug = debug;
    self
  }

  /// Controls whether interface-declared metadata merges into implementors.
  #[must_use]
  pub const fn include_interface_metadata(mut self, include: bool) -> Self {
    self.include_interface_metadata = include;
    self
  }

  /// Configures the cache root.
  ///
  /// The root is created eagerly; the `annotations/` and `metadata/`
  /// subtrees underneath it are created by `build()`.
  ///
  /// # Errors
  ///
  /// Returns [`ConfigError::CacheDirUnavailable`] when the root cannot be
  /// created and [`ConfigError::CacheDirNotWritable`] when it is not
  /// writable.
  pub fn set_cache_dir(mut self, path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
    let path = path.into();
    fs::create_dir_all(&path).map_err(|source| ConfigError::CacheDirUnavailable { path: path.clone(), source })?;
    let writable = fs::metadata(&path).map(|meta| !meta.permissions().readonly()).unwrap_or(false);
    if !writable {
      return Err(ConfigError::CacheDirNotWritable { path });
    }
    self.cache_dir = Some(path);
    Ok(self)
  }

  /// Replaces the whole namespace-prefix map.
  ///
  /// # Errors
  ///
  /// Returns [`ConfigError::MissingDirectory`] for a directory that does not
  /// exist and [`ConfigError::DuplicatePrefix`] when the iterator repeats a
  /// prefix.
  pub fn set_metadata_dirs<I>(mut self, dirs: I) -> Result<Self, ConfigError>
  where
    I: IntoIterator<Item = (String, PathBuf)>, {
    self.metadata_dirs.clear();
    for (prefix, dir) in dirs {
      self = self.add_metadata_dir(dir, prefix)?;
    }
    Ok(self)
  }

  /// Maps one namespace prefix onto a metadata directory.
  ///
  /// The empty prefix is the catch-all mapping.
  ///
  /// # Errors
  ///
  /// Returns [`ConfigError::MissingDirectory`] when the directory does not
  /// exist and [`ConfigError::DuplicatePrefix`] when the prefix is already
  /// mapped.
  pub fn add_metadata_dir(mut self, dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Result<Self, ConfigError> {
    let dir = dir.into();
    let prefix = prefix.into();
    Self::check_dir(&dir)?;
    if self.metadata_dirs.contains_key(&prefix) {
      return Err(ConfigError::DuplicatePrefix { prefix });
    }
    self.metadata_dirs.insert(prefix, dir);
    Ok(self)
  }

  /// Adds several prefix mappings at once.
  ///
  /// # Errors
  ///
  /// Propagates the first [`add_metadata_dir`](Self::add_metadata_dir)
  /// failure.
  pub fn add_metadata_dirs<I>(mut self, dirs: I) -> Result<Self, ConfigError>
  where
    I: IntoIterator<Item = (String, PathBuf)>, {
    for (prefix, dir) in dirs {
      self = self.add_metadata_dir(dir, prefix)?;
    }
    Ok(self)
  }

  /// Replaces the directory mapped to an existing prefix.
  ///
  /// # Errors
  ///
  /// Returns [`ConfigError::UnknownPrefix`] when the prefix has no mapping
  /// yet and [`ConfigError::MissingDirectory`] when the directory does not
  /// exist.
  pub fn replace_metadata_dir(
    mut self,
    dir: impl Into<PathBuf>,
    prefix: impl Into<String>,
  ) -> Result<Self, ConfigError> {
    let dir = dir.into();
    let prefix = prefix.into();
    Self::check_dir(&dir)?;
    if !self.metadata_dirs.contains_key(&prefix) {
      return Err(ConfigError::UnknownPrefix { prefix });
    }
    self.metadata_dirs.insert(prefix, dir);
    Ok(self)
  }

  /// Overrides the descriptor reader.
  #[must_use]
  pub fn set_descriptor_reader(mut self, reader: Arc<dyn DescriptorReader>) -> Self {
    self.descriptor_reader = Some(reader);
    self
  }

  /// Overrides the type parser.
  #[must_use]
  pub fn set_type_parser(mut self, parser: Arc<dyn TypeParser>) -> Self {
    self.type_parser = Some(parser);
    self
  }

  /// Overrides the property naming strategy.
  #[must_use]
  pub fn set_property_naming_strategy(mut self, strategy: Arc<dyn PropertyNamingStrategy>) -> Self {
    self.naming_strategy = Some(strategy);
    self
  }

  /// Overrides the metadata driver factory.
  #[must_use]
  pub fn set_metadata_driver_factory(mut self, factory: Arc<dyn DriverFactory>) -> Self {
    self.driver_factory = Some(factory);
    self
  }

  /// Overrides the accessor strategy.
  ///
  /// Clears a previously resolved accessor so the next resolution wraps the
  /// new strategy.
  #[must_use]
  pub fn set_accessor_strategy(mut self, accessor: Arc<dyn PropertyAccessor>) -> Self {
    self.accessor = Some(accessor);
    self.resolved_accessor = None;
    self
  }

  /// Supplies an expression evaluator wrapped around the accessor strategy.
  #[must_use]
  pub fn set_expression_evaluator(mut self, evaluator: Arc<dyn ExpressionEvaluator>) -> Self {
    self.expression_evaluator = Some(evaluator);
    self.resolved_accessor = None;
    self
  }

  /// Overrides the object constructor used by deserialization.
  #[must_use]
  pub fn set_object_constructor(mut self, constructor: Arc<dyn ObjectConstructor>) -> Self {
    self.object_constructor = Some(constructor);
    self
  }

  /// Sets the serialization context factory (typed factory or callable).
  #[must_use]
  pub fn set_serialization_context_factory(mut self, value: impl Into<ContextFactoryValue>) -> Self {
    self.serialization_context_factory = Some(value.into().normalize());
    self
  }

  /// Sets the deserialization context factory (typed factory or callable).
  #[must_use]
  pub fn set_deserialization_context_factory(mut self, value: impl Into<ContextFactoryValue>) -> Self {
    self.deserialization_context_factory = Some(value.into().normalize());
    self
  }

  /// Opens the handler registry for custom configuration.
  ///
  /// Calling this at all, even without registering anything, suppresses the
  /// built-in handler set.
  #[must_use]
  pub fn configure_handlers(mut self, configure: impl FnOnce(&mut HandlerRegistry)) -> Self {
    self.handlers_configured = true;
    configure(&mut self.handler_registry);
    self
  }

  /// Registers one exact-key handler.
  #[must_use]
  pub fn register_handler(
    mut self,
    direction: Direction,
    type_name: impl Into<String>,
    format: impl Into<String>,
    handler: HandlerFn,
  ) -> Self {
    self.handlers_configured = true;
    self.handler_registry.register_handler(direction, type_name, format, handler);
    self
  }

  /// Registers one subscribing handler.
  #[must_use]
  pub fn register_subscribing_handler(mut self, handler: Arc<dyn SubscribingHandler>) -> Self {
    self.handlers_configured = true;
    self.handler_registry.register_subscribing_handler(handler);
    self
  }

  /// Registers the built-in handler set explicitly.
  #[must_use]
  pub fn add_default_handlers(mut self) -> Self {
    self.install_default_handlers();
    self
  }

  /// Opens the event dispatcher for custom configuration.
  ///
  /// Calling this at all suppresses the built-in event subscriber.
  #[must_use]
  pub fn configure_listeners(mut self, configure: impl FnOnce(&mut EventDispatcher)) -> Self {
    self.listeners_configured = true;
    configure(&mut self.dispatcher);
    self
  }

  /// Registers one event subscriber.
  #[must_use]
  pub fn add_event_subscriber(mut self, subscriber: Arc<dyn EventSubscriber>) -> Self {
    self.listeners_configured = true;
    self.dispatcher.add_subscriber(subscriber);
    self
  }

  /// Registers the built-in event subscriber explicitly.
  #[must_use]
  pub fn add_default_listeners(mut self) -> Self {
    self.install_default_listeners();
    self
  }

  /// Registers a serialization visitor factory for one format.
  #[must_use]
  pub fn set_serialization_visitor(mut self, format: impl Into<String>, factory: SerializationVisitorFactory) -> Self {
    self.visitors_added = true;
    self.serialization_visitors.insert(format.into(), factory);
    self
  }

  /// Registers a deserialization visitor factory for one format.
  #[must_use]
  pub fn set_deserialization_visitor(
    mut self,
    format: impl Into<String>,
    factory: DeserializationVisitorFactory,
  ) -> Self {
    self.visitors_added = true;
    self.deserialization_visitors.insert(format.into(), factory);
    self
  }

  /// Registers the built-in serialization visitors (JSON and XML).
  #[must_use]
  pub fn add_default_serialization_visitors(mut self) -> Self {
    self.install_default_serialization_visitors();
    self
  }

  /// Registers the built-in deserialization visitors (JSON and XML).
  #[must_use]
  pub fn add_default_deserialization_visitors(mut self) -> Self {
    self.install_default_deserialization_visitors();
    self
  }

  /// Resolves the configuration into an immutable engine.
  ///
  /// Runs the one-time resolution: descriptor reader (cache-wrapped when a
  /// cache root is set), driver factory and metadata factory, default
  /// handler/listener/visitor injection under the default-once flags,
  /// navigator factories, and finally the engine facade. All directory
  /// validation already happened at configuration time; the only fallible
  /// step left is cache subtree creation.
  ///
  /// # Errors
  ///
  /// Returns [`BuildError::CacheSubtree`] when a cache subtree cannot be
  /// created.
  pub fn build(&mut self) -> Result<Serializer, BuildError> {
    let reader = self.resolve_descriptor_reader()?;
    let type_parser = self.resolve_type_parser();
    let metadata_factory = Arc::new(self.resolve_metadata_factory(reader, type_parser.clone())?);

    if !self.handlers_configured {
      tracing::debug!(target: "vellum::builder", "no handlers configured, injecting built-in handler set");
      self.install_default_handlers();
    }
    if !self.listeners_configured {
      tracing::debug!(target: "vellum::builder", "no listeners configured, injecting built-in event subscriber");
      self.install_default_listeners();
    }
    if !self.visitors_added {
      tracing::debug!(target: "vellum::builder", "no visitors configured, injecting JSON and XML visitor factories");
      self.install_default_serialization_visitors();
      self.install_default_deserialization_visitors();
    }

    let accessor = self.accessor_strategy();
    let handlers = Arc::new(self.handler_registry.clone());
    let dispatcher = Arc::new(self.dispatcher.clone());
    let constructor = self
      .object_constructor
      .clone()
      .unwrap_or_else(|| Arc::new(DefaultObjectConstructor::new(Arc::new(self.descriptor_registry.clone()))));

    let serialization_navigators = SerializationNavigatorFactory::new(
      metadata_factory.clone(),
      handlers.clone(),
      accessor.clone(),
      dispatcher.clone(),
    );
    let deserialization_navigators =
      DeserializationNavigatorFactory::new(metadata_factory.clone(), handlers, accessor, dispatcher, constructor);

    Ok(Serializer::from_parts(
      metadata_factory,
      serialization_navigators,
      deserialization_navigators,
      self.serialization_visitors.clone(),
      self.deserialization_visitors.clone(),
      self.serialization_context_factory.clone().unwrap_or_else(|| Arc::new(DefaultContextFactory::new())),
      self.deserialization_context_factory.clone().unwrap_or_else(|| Arc::new(DefaultContextFactory::new())),
      type_parser,
    ))
  }

  /// Resolves the accessor strategy exactly once.
  ///
  /// The resolved instance is memoized: asking twice returns the identical
  /// strategy and never re-wraps it with the expression decorator.
  pub(crate) fn accessor_strategy(&mut self) -> Arc<dyn PropertyAccessor> {
    if let Some(resolved) = &self.resolved_accessor {
      return resolved.clone();
    }
    let base = self.accessor.clone().unwrap_or_else(|| Arc::new(DirectPropertyAccessor::new()));
    let resolved = match &self.expression_evaluator {
      | Some(evaluator) => Arc::new(ExpressionAccessor::new(evaluator.clone(), base)) as Arc<dyn PropertyAccessor>,
      | None => base,
    };
    self.resolved_accessor = Some(resolved.clone());
    resolved
  }

  fn resolve_descriptor_reader(&mut self) -> Result<Arc<dyn DescriptorReader>, BuildError> {
    let reader = self
      .descriptor_reader
      .clone()
      .unwrap_or_else(|| Arc::new(RegistryDescriptorReader::new(Arc::new(self.descriptor_registry.clone()))));
    let Some(cache_dir) = &self.cache_dir else {
      return Ok(reader);
    };
    let annotations_dir = cache_dir.join(ANNOTATIONS_SUBTREE);
    fs::create_dir_all(&annotations_dir)
      .map_err(|source| BuildError::CacheSubtree { path: annotations_dir.clone(), source })?;
    Ok(Arc::new(CachedDescriptorReader::new(reader, annotations_dir, self.debug)))
  }

  fn resolve_type_parser(&mut self) -> Arc<dyn TypeParser> {
    if let Some(parser) = &self.type_parser {
      return parser.clone();
    }
    let parser: Arc<dyn TypeParser> = Arc::new(DefaultTypeParser::new());
    self.type_parser = Some(parser.clone());
    parser
  }

  fn resolve_naming_strategy(&mut self) -> Arc<dyn PropertyNamingStrategy> {
    if let Some(strategy) = &self.naming_strategy {
      return strategy.clone();
    }
    let strategy: Arc<dyn PropertyNamingStrategy> =
      Arc::new(SerializedNameStrategy::over(Arc::new(CamelCaseNamingStrategy::new())));
    self.naming_strategy = Some(strategy.clone());
    strategy
  }

  fn resolve_metadata_factory(
    &mut self,
    reader: Arc<dyn DescriptorReader>,
    type_parser: Arc<dyn TypeParser>,
  ) -> Result<MetadataFactory, BuildError> {
    let naming = self.resolve_naming_strategy();
    let driver_factory = self
      .driver_factory
      .clone()
      .unwrap_or_else(|| Arc::new(DefaultDriverFactory::new(naming, type_parser)));
    let mut dirs: Vec<(String, PathBuf)> =
      self.metadata_dirs.iter().map(|(prefix, dir)| (prefix.clone(), dir.clone())).collect();
    dirs.sort_by(|(a, _), (b, _)| a.cmp(b));
    let driver = driver_factory.create_driver(dirs, reader);
    let cache = match &self.cache_dir {
      | Some(cache_dir) => {
        let metadata_dir = cache_dir.join(METADATA_SUBTREE);
        fs::create_dir_all(&metadata_dir)
          .map_err(|source| BuildError::CacheSubtree { path: metadata_dir.clone(), source })?;
        Some(FileMetadataCache::new(metadata_dir))
      },
      | None => None,
    };
    Ok(MetadataFactory::new(driver, self.include_interface_metadata, self.debug, cache))
  }

  fn install_default_handlers(&mut self) {
    self.handlers_configured = true;
    self.handler_registry.register_subscribing_handler(Arc::new(DateTimeHandler::new()));
    self.handler_registry.register_subscribing_handler(Arc::new(IterableHandler::new()));
    self.handler_registry.register_subscribing_handler(Arc::new(PlainMapHandler::new()));
  }

  fn install_default_listeners(&mut self) {
    self.listeners_configured = true;
    self.dispatcher.add_subscriber(Arc::new(TraversalLogSubscriber::new()));
  }

  fn install_default_serialization_visitors(&mut self) {
    self.visitors_added = true;
    self.serialization_visitors.insert("json".into(), Arc::new(|| Box::new(JsonSerializationVisitor::new())));
    self.serialization_visitors.insert("xml".into(), Arc::new(|| Box::new(XmlSerializationVisitor::new())));
  }

  fn install_default_deserialization_visitors(&mut self) {
    self.visitors_added = true;
    self.deserialization_visitors.insert("json".into(), Arc::new(|| Box::new(JsonDeserializationVisitor::new())));
    self.deserialization_visitors.insert("xml".into(), Arc::new(|| Box::new(XmlDeserializationVisitor::new())));
  }

  fn check_dir(dir: &Path) -> Result<(), ConfigError> {
    if !dir.is_dir() {
      return Err(ConfigError::MissingDirectory { path: dir.into() });
    }
    Ok(())
  }
}

impl Default for SerializerBuilder {
  fn default() -> Self {
    Self::new()
  }
}
