//! Attribute descriptors returned by a metadata source.

use serde::{Deserialize, Serialize};

/// Metadata describing one attribute exposed under a name.
///
/// Opaque to the cache: it is stored and handed back, never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeDescriptor {
    pub name: String,
    /// Type tag as reported by the source (e.g. `long`, `java.lang.String`).
    pub type_name: String,
    pub description: Option<String>,
    pub readable: bool,
    pub writable: bool,
    /// Whether the attribute is exposed through an `is` getter.
    pub is_getter: bool,
}

impl AttributeDescriptor {
    /// A readable, non-writable attribute with no description.
    pub fn read_only(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            description: None,
            readable: true,
            writable: false,
            is_getter: false,
        }
    }
}
