//! Controller configuration: TOML documents plus environment overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{PromptCopy, RateError, Storefront};

/// Environment variable overriding the store identifier.
pub const ENV_STORE_ID: &str = "APP_RATE_STORE_ID";
/// Environment variable overriding the storefront (a name or a custom template).
pub const ENV_STOREFRONT: &str = "APP_RATE_STOREFRONT";

/// Serializable configuration for a [`crate::RateController`].
///
/// Every field is optional in the document:
///
/// ```toml
/// store_identifier = "123456789"
///
/// [storefront]
/// kind = "app-store"
///
/// [prompt]
/// title = "Enjoying the app?"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateConfig {
    /// Storefront identifier of the application.
    pub store_identifier: Option<String>,
    /// Storefront whose review page is opened.
    pub storefront: Storefront,
    /// Dialog copy.
    pub prompt: PromptCopy,
}

impl RateConfig {
    /// Parses a TOML configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`RateError::ConfigParse`] when the document is not valid configuration.
    pub fn from_toml_str(raw: &str) -> Result<Self, RateError> {
        Ok(toml::from_str(raw)?)
    }

    /// Renders the configuration as a TOML document readable by [`from_toml_str`](Self::from_toml_str).
    ///
    /// # Errors
    ///
    /// Returns [`RateError::ConfigWrite`] when serialization fails.
    pub fn to_toml_string(&self) -> Result<String, RateError> {
        Ok(toml::to_string(self)?)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`RateError::ConfigRead`] when the file cannot be read and
    /// [`RateError::ConfigParse`] when it cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RateError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| RateError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&raw)?;
        tracing::debug!(path = %path.display(), "loaded rate config");
        Ok(config)
    }

    /// Applies [`ENV_STORE_ID`] and [`ENV_STOREFRONT`] from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`RateError::UnknownStorefront`] when the storefront override is not recognized.
    pub fn apply_env_overrides(&mut self) -> Result<(), RateError> {
        self.apply_env_overrides_from(|key| std::env::var(key).ok())
    }

    /// Applies overrides using `lookup` in place of the process environment.
    ///
    /// Blank values are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`RateError::UnknownStorefront`] when the storefront override is not recognized.
    pub fn apply_env_overrides_from<F>(&mut self, lookup: F) -> Result<(), RateError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(id) = present(ENV_STORE_ID) {
            self.store_identifier = Some(id);
        }
        if let Some(storefront) = present(ENV_STOREFRONT) {
            self.storefront = storefront.parse()?;
        }
        Ok(())
    }
}
