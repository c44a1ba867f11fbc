//! # beanprop-core
//!
//! Core types, traits, errors, and configuration shared by the beanprop crates.
//! Managed-resource names, ordered key property lists, attribute descriptors,
//! the metadata source seam, and tracing setup.

pub mod config;
pub mod errors;
pub mod logging;
pub mod traits;
pub mod types;

pub use config::{BeanpropConfig, CacheConfig, LoggingConfig};
pub use errors::{ConfigError, MetadataError, NameError};
pub use traits::MetadataSource;
pub use types::{AttributeDescriptor, KeyPropertyList, ObjectName};
