//! Storefront error types.

use std::path::PathBuf;

use eco_commerce::CommerceError;
use thiserror::Error;

/// Errors raised while setting up a storefront.
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// Config file could not be read.
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file could not be parsed.
    #[error("Failed to parse config file {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// Config values are inconsistent.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Domain error.
    #[error(transparent)]
    Commerce(#[from] CommerceError),
}
