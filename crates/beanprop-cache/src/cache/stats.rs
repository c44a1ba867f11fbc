//! Lookup counters for the name property cache.

use std::sync::atomic::{AtomicU64, Ordering};

/// Point-in-time snapshot of cache activity since construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Property lookups served from the cache.
    pub property_hits: u64,
    /// Property lookups that ran the parser.
    pub parses: u64,
    /// Attribute lookups served from the cache.
    pub attribute_hits: u64,
    /// Calls made to a metadata source, failed ones included.
    pub attribute_fetches: u64,
    /// Entries removed by reconcile, across both maps.
    pub evicted: u64,
}

#[derive(Debug, Default)]
pub(crate) struct CacheCounters {
    pub(crate) property_hits: AtomicU64,
    pub(crate) parses: AtomicU64,
    pub(crate) attribute_hits: AtomicU64,
    pub(crate) attribute_fetches: AtomicU64,
    pub(crate) evicted: AtomicU64,
}

impl CacheCounters {
    pub(crate) fn bump(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self) -> CacheStats {
        CacheStats {
            property_hits: self.property_hits.load(Ordering::Relaxed),
            parses: self.parses.load(Ordering::Relaxed),
            attribute_hits: self.attribute_hits.load(Ordering::Relaxed),
            attribute_fetches: self.attribute_fetches.load(Ordering::Relaxed),
            evicted: self.evicted.load(Ordering::Relaxed),
        }
    }
}
