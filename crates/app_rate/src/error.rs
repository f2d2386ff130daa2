//! Error taxonomy for the rating controller.

use std::path::PathBuf;

use platform_host::CapabilityError;
use thiserror::Error;

/// Errors produced while resolving a review URL, loading configuration, or driving host services.
#[derive(Debug, Error)]
pub enum RateError {
    /// No store identifier has been configured.
    #[error("store identifier is not configured")]
    NotConfigured,

    /// The configured identifier cannot be placed in a URL.
    #[error("store identifier {0:?} is not usable")]
    InvalidIdentifier(String),

    /// A storefront template cannot produce a URL.
    #[error("storefront template {template:?} is invalid: {reason}")]
    InvalidTemplate {
        /// Offending template text.
        template: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A storefront name did not match any known storefront.
    #[error("unknown storefront {0:?}")]
    UnknownStorefront(String),

    /// A host collaborator reported a failure.
    #[error("host service failed: {0}")]
    Host(String),

    /// The active host cannot perform the operation.
    #[error(transparent)]
    Capability(#[from] CapabilityError),

    /// A configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A configuration document could not be parsed.
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A configuration could not be written as TOML.
    #[error("failed to serialize config: {0}")]
    ConfigWrite(#[from] toml::ser::Error),
}
