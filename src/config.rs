//! Runtime configuration, read from TOML.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// Key the cart record is stored under.
pub const DEFAULT_STORAGE_KEY: &str = "@RocketShoes:cart";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CartConfig {
    pub storage_key: String,
    /// Mailbox size of the cart actor.
    pub channel_capacity: usize,
    /// Directory for the file-backed store. In-memory storage when unset.
    pub storage_dir: Option<PathBuf>,
    pub logging: LoggingConfig,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            channel_capacity: 32,
            storage_dir: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl CartConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(ConfigError::Parse)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(ConfigError::Read)?;
        Self::from_toml_str(&raw)
    }

    /// Config from `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `"compact"` or `"json"`.
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "compact".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = CartConfig::from_toml_str("").unwrap();

        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert_eq!(config.channel_capacity, 32);
        assert!(config.storage_dir.is_none());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parses_all_fields() {
        let raw = r#"
            storage_key = "shop:cart"
            channel_capacity = 8
            storage_dir = "/tmp/cart"

            [logging]
            level = "debug"
            format = "json"
        "#;
        let config = CartConfig::from_toml_str(raw).unwrap();

        assert_eq!(config.storage_key, "shop:cart");
        assert_eq!(config.channel_capacity, 8);
        assert_eq!(config.storage_dir, Some(PathBuf::from("/tmp/cart")));
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_rejects_wrong_types() {
        let result = CartConfig::from_toml_str("channel_capacity = \"many\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"storage_key = \"from-file\"").unwrap();

        let config = CartConfig::load_or_default(Some(file.path())).unwrap();
        assert_eq!(config.storage_key, "from-file");

        assert!(matches!(
            CartConfig::load("/nonexistent/cart.toml"),
            Err(ConfigError::Read(_))
        ));
    }
}
