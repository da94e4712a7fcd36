//! Layered configuration assembly.

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::AccessorConfig;
use crate::config::validator::ConfigValidator;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Builds an [`AccessorConfig`] from files, the environment and overrides.
///
/// Layers are applied lowest to highest precedence: files in the order they
/// were added, then `DOTPATH_*` environment variables, then the programmatic
/// override. Missing files are skipped.
///
/// # Examples
///
/// ```
/// use dotpath::config::{AccessorConfig, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_env()
///     .with_config(AccessorConfig {
///         delimiter: Some("/".to_string()),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
/// assert_eq!(config.delimiter, Some("/".to_string()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    files: Vec<PathBuf>,
    skip_env: bool,
    overrides: Option<AccessorConfig>,
}

impl ConfigBuilder {
    /// Create a builder with no layers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a YAML configuration file layer.
    #[must_use]
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        self.files.push(path.as_ref().to_path_buf());
        self
    }

    /// Ignore `DOTPATH_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Add a programmatic override with the highest precedence.
    #[must_use]
    pub fn with_config(mut self, config: AccessorConfig) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Merge all layers and validate the result.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be parsed, an environment variable
    /// is invalid, or the merged configuration fails validation.
    pub fn build(self) -> Result<AccessorConfig> {
        let mut file_layers = Vec::with_capacity(self.files.len());
        for path in &self.files {
            if let Some(layer) = ConfigLoader::load_optional(path)? {
                file_layers.push(layer);
            } else {
                log::debug!("configuration file {} not found, skipping", path.display());
            }
        }
        let mut config = ConfigMerger::merge(&file_layers);

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}
