//! Configuration for the unification engine.

use serde::Deserialize;

use crate::backend::errors::{UnifyError, UnifyResult};

/// Record key that marks a catch-all entry by default
pub const DEFAULT_CATCH_ALL_KEY: &str = "_";

/// Unification configuration
///
/// Can be loaded from TOML:
///
/// ```toml
/// catch_all_key = "_"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UnifyConfig {
    /// Record key whose presence relaxes the exact key-set rule.
    /// `None` disables the relaxation entirely.
    pub catch_all_key: Option<String>,
}

impl Default for UnifyConfig {
    fn default() -> Self {
        Self {
            catch_all_key: Some(DEFAULT_CATCH_ALL_KEY.to_string()),
        }
    }
}

impl UnifyConfig {
    /// Use a different catch-all key
    pub fn with_catch_all_key(mut self, key: impl Into<String>) -> Self {
        self.catch_all_key = Some(key.into());
        self
    }

    /// Require exact key sets for every record pair
    pub fn without_catch_all(mut self) -> Self {
        self.catch_all_key = None;
        self
    }

    /// Parse a configuration from a TOML document
    pub fn from_toml_str(source: &str) -> UnifyResult<Self> {
        toml::from_str(source).map_err(|e| UnifyError::InvalidConfig(e.to_string()))
    }

    #[inline]
    pub(crate) fn catch_all_key(&self) -> Option<&str> {
        self.catch_all_key.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catch_all_key() {
        assert_eq!(UnifyConfig::default().catch_all_key(), Some("_"));
    }

    #[test]
    fn test_builders() {
        let config = UnifyConfig::default().with_catch_all_key("*");
        assert_eq!(config.catch_all_key(), Some("*"));
        assert_eq!(config.without_catch_all().catch_all_key(), None);
    }

    #[test]
    fn test_from_toml() {
        let config = UnifyConfig::from_toml_str(r#"catch_all_key = "rest""#).unwrap();
        assert_eq!(config.catch_all_key(), Some("rest"));

        let empty = UnifyConfig::from_toml_str("").unwrap();
        assert_eq!(empty, UnifyConfig::default());
    }

    #[test]
    fn test_from_toml_rejects_bad_types() {
        let err = UnifyConfig::from_toml_str("catch_all_key = 3").unwrap_err();
        assert!(matches!(err, UnifyError::InvalidConfig(_)));
    }
}
