//! MetadataSource trait — the injected attribute lookup.

use crate::types::{AttributeDescriptor, ObjectName};

/// Fetches the attribute descriptors published under a name.
///
/// Usually backed by a remote management connection, so a call may block and
/// may fail. Failures are opaque to the cache and reach the caller unchanged.
pub trait MetadataSource {
    type Error;

    fn fetch_attributes(&self, name: &ObjectName) -> Result<Vec<AttributeDescriptor>, Self::Error>;
}

impl<F, E> MetadataSource for F
where
    F: Fn(&ObjectName) -> Result<Vec<AttributeDescriptor>, E>,
{
    type Error = E;

    fn fetch_attributes(&self, name: &ObjectName) -> Result<Vec<AttributeDescriptor>, E> {
        self(name)
    }
}
