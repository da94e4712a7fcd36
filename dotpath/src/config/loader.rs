//! Configuration file loading.
//!
//! Configuration files are YAML documents matching [`AccessorConfig`].

use crate::config::schema::AccessorConfig;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Loads accessor configuration from files.
///
/// # Examples
///
/// ```no_run
/// use dotpath::config::ConfigLoader;
/// use std::path::Path;
///
/// let config = ConfigLoader::load_file(Path::new("dotpath.yaml")).unwrap();
/// println!("delimiter: {:?}", config.delimiter);
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<AccessorConfig> {
        let contents = fs::read_to_string(path)?;
        let config = serde_yaml::from_str(&contents)?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load a configuration file if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_optional(path: &Path) -> Result<Option<AccessorConfig>> {
        match Self::load_file(path) {
            Ok(config) => Ok(Some(config)),
            Err(Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}
