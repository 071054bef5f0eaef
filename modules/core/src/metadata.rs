//! Per-class metadata and the resolution pipeline that produces it.

/// File-backed cache decorator for descriptor readers.
mod cached_descriptor_reader;
/// Structural description of one class.
mod class_metadata;
/// Default driver factory.
mod default_driver_factory;
/// Compile-time metadata source implemented by participating types.
mod describe;
/// Descriptor reading seam (the attribute-reader analog).
mod descriptor_reader;
/// Registry of compiled-in descriptors and instantiators.
mod descriptor_registry;
/// Ordered first-match driver composition.
mod driver_chain;
/// Driver construction seam.
mod driver_factory;
/// File-backed cache for resolved class metadata.
mod file_metadata_cache;
/// Driver loading JSON metadata files through the namespace-prefix map.
mod file_metadata_driver;
/// Metadata driver seam.
mod metadata_driver;
/// Memoizing metadata factory with ancestry merging.
mod metadata_factory;
/// Structural description of one property.
mod property_metadata;
/// Driver adapter over a descriptor reader.
mod reader_metadata_driver;
/// Default descriptor reader over a frozen registry.
mod registry_descriptor_reader;
/// Driver decorator baking wire names into metadata.
mod resolved_naming_driver;

pub use cached_descriptor_reader::CachedDescriptorReader;
pub use class_metadata::ClassMetadata;
pub use default_driver_factory::DefaultDriverFactory;
pub use describe::Describe;
pub use descriptor_reader::DescriptorReader;
pub use descriptor_registry::DescriptorRegistry;
pub use driver_chain::DriverChain;
pub use driver_factory::DriverFactory;
pub use file_metadata_cache::FileMetadataCache;
pub use file_metadata_driver::FileMetadataDriver;
pub use metadata_driver::MetadataDriver;
pub use metadata_factory::MetadataFactory;
pub use property_metadata::PropertyMetadata;
pub use reader_metadata_driver::ReaderMetadataDriver;
pub use registry_descriptor_reader::RegistryDescriptorReader;
pub use resolved_naming_driver::ResolvedNamingDriver;
