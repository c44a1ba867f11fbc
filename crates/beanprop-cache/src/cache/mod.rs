//! Name property cache and its lookup counters.

pub mod name_property;
pub mod stats;

pub use name_property::NamePropertyCache;
pub use stats::CacheStats;
