//! Shared traits used across beanprop crates.

pub mod metadata_source;

pub use metadata_source::MetadataSource;
