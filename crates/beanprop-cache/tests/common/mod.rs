//! Shared fixtures for beanprop-cache integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use beanprop_core::types::FxHashMap;
use beanprop_core::{AttributeDescriptor, MetadataError, MetadataSource, ObjectName};

pub fn name(s: &str) -> ObjectName {
    ObjectName::parse(s).expect("valid object name")
}

/// Metadata source that counts calls per name and can be told to fail.
#[derive(Default)]
pub struct CountingSource {
    calls: Mutex<FxHashMap<ObjectName, u64>>,
    failing: AtomicBool,
}

impl CountingSource {
    pub fn calls(&self, name: &ObjectName) -> u64 {
        self.calls.lock().unwrap().get(name).copied().unwrap_or(0)
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

impl MetadataSource for CountingSource {
    type Error = MetadataError;

    fn fetch_attributes(&self, name: &ObjectName) -> Result<Vec<AttributeDescriptor>, MetadataError> {
        *self.calls.lock().unwrap().entry(name.clone()).or_default() += 1;

        if self.failing.load(Ordering::SeqCst) {
            return Err(MetadataError::Connection {
                message: "connection reset".to_string(),
            });
        }

        Ok(vec![
            AttributeDescriptor::read_only("HeapMemoryUsage", "javax.management.openmbean.CompositeData"),
            AttributeDescriptor {
                name: "Verbose".to_string(),
                type_name: "boolean".to_string(),
                description: Some("verbose output".to_string()),
                readable: true,
                writable: true,
                is_getter: true,
            },
        ])
    }
}
