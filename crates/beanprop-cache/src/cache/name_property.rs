//! Name property cache: parsed key property lists and attribute descriptors
//! per managed-resource name, kept in step with the live name population.
//!
//! Both maps are sharded and lock-free for readers; parsing and metadata
//! fetches run outside any map lock, so work on one name never blocks lookups
//! for another.

use std::collections::HashSet;
use std::fmt;
use std::hash::BuildHasher;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use beanprop_core::{AttributeDescriptor, CacheConfig, KeyPropertyList, MetadataSource, ObjectName};
use dashmap::DashMap;
use moka::sync::Cache;
use tracing::{debug, trace};

use super::stats::{CacheCounters, CacheStats};
use crate::properties::parse_key_property_list;

/// Memoizes per-name parse results and, optionally, attribute metadata.
pub struct NamePropertyCache {
    /// Unbounded: entries leave only through `reconcile`.
    key_properties: Cache<ObjectName, Arc<KeyPropertyList>>,
    attribute_info: DashMap<ObjectName, Arc<[AttributeDescriptor]>>,
    cache_attribute_info: AtomicBool,
    counters: CacheCounters,
}

impl NamePropertyCache {
    /// Create an empty cache, with attribute caching on or off.
    pub fn new(cache_attribute_info: bool) -> Self {
        Self {
            key_properties: Cache::builder().build(),
            attribute_info: DashMap::new(),
            cache_attribute_info: AtomicBool::new(cache_attribute_info),
            counters: CacheCounters::default(),
        }
    }

    /// Create an empty cache from the `[cache]` config section.
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.cache_attribute_info)
    }

    /// Ordered key properties of `name`, parsed on first request.
    ///
    /// Later calls with an equal name return the same shared list without
    /// parsing again. Concurrent first requests for one name parse it once.
    pub fn get_key_property_list(&self, name: &ObjectName) -> Arc<KeyPropertyList> {
        let mut parsed = false;
        let properties = self.key_properties.get_with_by_ref(name, || {
            parsed = true;
            trace!(%name, "parsing key property list");
            Arc::new(parse_key_property_list(name.key_property_list_string()))
        });

        if parsed {
            CacheCounters::bump(&self.counters.parses);
        } else {
            CacheCounters::bump(&self.counters.property_hits);
        }
        properties
    }

    /// Attribute descriptors of `name`.
    ///
    /// With attribute caching disabled every call goes to `source` and the map
    /// is left alone. When enabled, a miss fetches from `source` and stores
    /// the result. Source errors are returned as-is and nothing is stored, so
    /// the next call fetches again.
    pub fn get_attributes<M>(
        &self,
        name: &ObjectName,
        source: &M,
    ) -> Result<Arc<[AttributeDescriptor]>, M::Error>
    where
        M: MetadataSource + ?Sized,
    {
        if !self.is_metadata_caching_enabled() {
            CacheCounters::bump(&self.counters.attribute_fetches);
            return source.fetch_attributes(name).map(Arc::from);
        }

        if let Some(cached) = self.attribute_info.get(name) {
            CacheCounters::bump(&self.counters.attribute_hits);
            return Ok(Arc::clone(cached.value()));
        }

        trace!(%name, "fetching attribute info");
        CacheCounters::bump(&self.counters.attribute_fetches);
        let fetched: Arc<[AttributeDescriptor]> = source.fetch_attributes(name)?.into();

        // A concurrent fetch may have stored first; keep its result.
        let stored = self
            .attribute_info
            .entry(name.clone())
            .or_insert(fetched);
        Ok(Arc::clone(stored.value()))
    }

    /// Turn attribute caching on or off.
    ///
    /// Turning it off clears the attribute map immediately, so re-enabling
    /// later starts empty instead of serving descriptors from before.
    pub fn set_metadata_caching_enabled(&self, enabled: bool) {
        let was_enabled = self.cache_attribute_info.swap(enabled, Ordering::AcqRel);
        if was_enabled && !enabled {
            let cleared = self.attribute_info.len();
            self.attribute_info.clear();
            debug!(cleared, "attribute info caching disabled, cached descriptors dropped");
        }
    }

    /// Whether attribute descriptors are currently memoized.
    pub fn is_metadata_caching_enabled(&self) -> bool {
        self.cache_attribute_info.load(Ordering::Acquire)
    }

    /// Drop every entry, in both maps, whose name is not in `current`.
    ///
    /// Entries inserted concurrently for names outside `current` may survive;
    /// the next reconcile removes them.
    pub fn reconcile<S: BuildHasher>(&self, current: &HashSet<ObjectName, S>) {
        let mut evicted_properties = 0u64;
        for (name, _) in self.key_properties.iter() {
            if !current.contains(&*name) {
                self.key_properties.invalidate(&*name);
                evicted_properties += 1;
            }
        }

        let mut evicted_attributes = 0u64;
        self.attribute_info.retain(|name, _| {
            let keep = current.contains(name);
            if !keep {
                evicted_attributes += 1;
            }
            keep
        });

        let evicted = evicted_properties + evicted_attributes;
        if evicted > 0 {
            self.counters.evicted.fetch_add(evicted, Ordering::Relaxed);
            debug!(
                evicted_properties,
                evicted_attributes,
                live = current.len(),
                "reconciled name property cache"
            );
        }
    }

    /// Number of names with a cached key property list.
    pub fn property_entry_count(&self) -> usize {
        self.key_properties.iter().count()
    }

    /// Number of names with cached attribute descriptors.
    pub fn attribute_entry_count(&self) -> usize {
        self.attribute_info.len()
    }

    /// Whether `name` has a cached key property list.
    pub fn contains_properties(&self, name: &ObjectName) -> bool {
        self.key_properties.contains_key(name)
    }

    /// Whether `name` has cached attribute descriptors.
    pub fn contains_attributes(&self, name: &ObjectName) -> bool {
        self.attribute_info.contains_key(name)
    }

    /// Snapshot of lookup counters since construction.
    pub fn stats(&self) -> CacheStats {
        self.counters.snapshot()
    }
}

impl Default for NamePropertyCache {
    fn default() -> Self {
        Self::new(false)
    }
}

impl fmt::Debug for NamePropertyCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamePropertyCache")
            .field("property_entries", &self.property_entry_count())
            .field("attribute_entries", &self.attribute_entry_count())
            .field("cache_attribute_info", &self.is_metadata_caching_enabled())
            .finish()
    }
}
