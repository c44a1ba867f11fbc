//! Managed-resource names: a domain plus an encoded key property list.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::NameError;

/// Identity of a managed resource.
///
/// Equality and hashing are structural over the domain and the encoded
/// property-list string, so a name rebuilt on the next poll cycle matches the
/// entry cached on the previous one. The property list is kept verbatim; it is
/// only interpreted by the property-list parser.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectName {
    domain: String,
    key_properties: String,
}

impl ObjectName {
    /// Build a name from its two parts without validation.
    pub fn new(domain: impl Into<String>, key_properties: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            key_properties: key_properties.into(),
        }
    }

    /// Parse `domain:key=value,...`, splitting at the first `:`.
    ///
    /// The domain may be empty; the property list may not.
    pub fn parse(input: &str) -> Result<Self, NameError> {
        let (domain, key_properties) =
            input
                .split_once(':')
                .ok_or_else(|| NameError::MissingSeparator {
                    input: input.to_string(),
                })?;

        if key_properties.is_empty() {
            return Err(NameError::EmptyPropertyList {
                input: input.to_string(),
            });
        }

        Ok(Self::new(domain, key_properties))
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// The encoded property list, exactly as given.
    pub fn key_property_list_string(&self) -> &str {
        &self.key_properties
    }
}

impl FromStr for ObjectName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ObjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.domain, self.key_properties)
    }
}
