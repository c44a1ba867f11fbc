//! Error types for beanprop.
//!
//! Parsing a property list never fails; these cover name construction,
//! configuration, and the metadata lookup seam.

use thiserror::Error;

/// Failure to split `domain:properties` into an [`ObjectName`](crate::ObjectName).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("object name `{input}` has no domain separator ':'")]
    MissingSeparator { input: String },

    #[error("object name `{input}` has an empty key property list")]
    EmptyPropertyList { input: String },
}

/// Configuration loading and logging setup errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {message}")]
    Io { path: String, message: String },

    #[error("invalid config: {message}")]
    Parse { message: String },

    #[error("failed to install tracing subscriber: {message}")]
    LoggingInit { message: String },
}

/// Errors a metadata source may report for a single name.
///
/// The cache never inspects these; they pass through to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetadataError {
    #[error("instance not found: {name}")]
    InstanceNotFound { name: String },

    #[error("metadata connection failed: {message}")]
    Connection { message: String },
}
