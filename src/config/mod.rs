//! Configuration module for catalog-search
//!
//! Selects where the category list comes from and how category labels are
//! matched when a label-based request is resolved.
//! Configuration is stored in the user's config directory.
//!
//! ```toml
//! categories_file = "/srv/catalog/categories.toml"
//! label_matching = "ignore_case"
//! ```

use crate::category::TomlCategoryProvider;
use crate::request::LabelMatching;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct CatalogConfig {
    /// TOML file listing the drink categories
    #[serde(default)]
    pub categories_file: Option<PathBuf>,

    /// How category labels are matched against category names
    #[serde(default)]
    pub label_matching: LabelMatching,
}

impl CatalogConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("catalog-search").join("config.toml"))
    }

    /// Load configuration from the default location
    ///
    /// A missing file yields the defaults; nothing is written.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory is unknown or the file cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save configuration to a specific file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Provider for the configured category file, if one is set
    #[must_use]
    pub fn category_provider(&self) -> Option<TomlCategoryProvider> {
        self.categories_file.as_ref().map(TomlCategoryProvider::new)
    }
}
