//! TOML configuration for beanprop.
//!
//! Every field has a default, so an empty document (or a missing file) yields
//! a usable configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Default config file name looked up under the project root.
pub const CONFIG_FILE_NAME: &str = "beanprop.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeanpropConfig {
    pub cache: CacheConfig,
    pub logging: LoggingConfig,
}

/// Settings for the name property cache.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Whether attribute descriptors are memoized per name.
    ///
    /// Off by default: applications may change their attribute metadata at
    /// runtime, in which case cached descriptors go stale.
    pub cache_attribute_info: bool,
}

/// Settings for the tracing subscriber.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG` when set.
    pub level: String,
    /// Emit newline-delimited JSON instead of the human-readable format.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl BeanpropConfig {
    /// Parse a configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Load configuration for a project.
    ///
    /// Reads `explicit` when given, otherwise `<root>/beanprop.toml`. A missing
    /// default file falls back to defaults; a missing explicit file is an error.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = root.join(CONFIG_FILE_NAME);
                if !candidate.exists() {
                    tracing::debug!(root = %root.display(), "no config file found, using defaults");
                    return Ok(Self::default());
                }
                candidate
            }
        };

        let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = BeanpropConfig::from_toml("").unwrap();
        assert_eq!(config, BeanpropConfig::default());
        assert!(!config.cache.cache_attribute_info);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_toml() {
        let config = BeanpropConfig::from_toml(
            r#"
            [cache]
            cache_attribute_info = true
            "#,
        )
        .unwrap();
        assert!(config.cache.cache_attribute_info);
        assert!(!config.logging.json);
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let err = BeanpropConfig::from_toml("[cache]\ncache_attribute_info = \"yes\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_missing_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = BeanpropConfig::load(dir.path(), None).unwrap();
        assert_eq!(config, BeanpropConfig::default());
    }

    #[test]
    fn test_load_from_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[logging]\nlevel = \"debug\"\njson = true\n",
        )
        .unwrap();

        let config = BeanpropConfig::load(dir.path(), None).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = BeanpropConfig::load(dir.path(), Some(&missing)).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
