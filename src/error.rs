//! Error types for dyndns-update.

use crate::providers::UpdateResult;
use thiserror::Error;

/// Result type alias for dyndns-update.
pub type Result<T> = std::result::Result<T, DdnsError>;

/// DDNS error types.
#[derive(Error, Debug)]
pub enum DdnsError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network/HTTP error.
    #[error("Network error: {0}")]
    Network(String),

    /// IP detection error.
    #[error("IP detection failed: {0}")]
    IpDetection(String),

    /// Hostname suffix matched no known service and no token was given.
    #[error("Cannot get service from hostname")]
    UnknownService(String),

    /// One message per missing credential, e.g. "Missing username".
    #[error("{}", .0.join("\n"))]
    MissingCredentials(Vec<String>),

    /// The provider answered, but did not accept the update.
    #[error("Failed to update IP address: {}", .0.response.trim())]
    UpdateRejected(Box<UpdateResult>),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for DdnsError {
    fn from(e: reqwest::Error) -> Self {
        DdnsError::Network(e.to_string())
    }
}

impl From<toml::de::Error> for DdnsError {
    fn from(e: toml::de::Error) -> Self {
        DdnsError::Config(e.to_string())
    }
}
