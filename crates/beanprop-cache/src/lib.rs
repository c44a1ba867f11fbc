//! # beanprop-cache
//!
//! Parse-once cache for managed-resource names.
//! Contains the property-list grammar and the concurrent name property cache
//! with its optional attribute metadata map.

pub mod cache;
pub mod properties;

pub use cache::{CacheStats, NamePropertyCache};
pub use properties::parse_key_property_list;
