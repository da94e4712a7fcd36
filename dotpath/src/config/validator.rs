//! Configuration validation.

use crate::config::schema::AccessorConfig;
use crate::error::{Error, Result};

/// Validates accessor configuration.
///
/// # Examples
///
/// ```
/// use dotpath::config::{AccessorConfig, ConfigValidator};
///
/// ConfigValidator::validate(&AccessorConfig::default()).unwrap();
///
/// let bad = AccessorConfig { delimiter: Some(String::new()), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the delimiter is empty.
    pub fn validate(config: &AccessorConfig) -> Result<()> {
        if let Some(ref delimiter) = config.delimiter {
            Self::validate_delimiter(delimiter)?;
        }
        Ok(())
    }

    fn validate_delimiter(delimiter: &str) -> Result<()> {
        if delimiter.is_empty() {
            return Err(Error::Validation {
                field: "delimiter".into(),
                message: "delimiter must be non-empty".into(),
            });
        }
        Ok(())
    }
}
