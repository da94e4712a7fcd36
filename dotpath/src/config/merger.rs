//! Configuration merging and precedence handling.

use crate::config::schema::AccessorConfig;

/// Merges configuration layers according to precedence rules.
///
/// # Examples
///
/// ```
/// use dotpath::config::{AccessorConfig, ConfigMerger};
///
/// let low = AccessorConfig { delimiter: Some("/".to_string()), upsert: Some(true), ..Default::default() };
/// let high = AccessorConfig { delimiter: Some(":".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.delimiter, Some(":".to_string()));
/// assert_eq!(result.upsert, Some(true));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge layers given in order from lowest to highest precedence.
    #[must_use]
    pub fn merge<'a, I>(layers: I) -> AccessorConfig
    where
        I: IntoIterator<Item = &'a AccessorConfig>,
    {
        let mut result = AccessorConfig::default();
        for layer in layers {
            Self::merge_into(&mut result, layer);
        }
        result
    }

    /// Merge source config into target; fields set in `source` win.
    pub fn merge_into(target: &mut AccessorConfig, source: &AccessorConfig) {
        if source.delimiter.is_some() {
            target.delimiter.clone_from(&source.delimiter);
        }
        if source.upsert.is_some() {
            target.upsert = source.upsert;
        }
        if source.delivery.is_some() {
            target.delivery = source.delivery;
        }
    }
}
