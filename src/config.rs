//! Configuration management for dyndns-update.

use crate::error::{DdnsError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// User-Agent sent with every request.
pub const USER_AGENT: &str = concat!("dyndns-update/", env!("CARGO_PKG_VERSION"));

/// Endpoint and client settings.
///
/// Nothing here is required at runtime: `Config::default()` carries the
/// production endpoints, and a TOML file passed with `--config` only
/// overrides the fields it names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Request timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// IPv4 echo services, tried in order.
    #[serde(default = "default_ipv4_services")]
    pub ipv4_services: Vec<String>,

    /// IPv6 echo services, tried in order.
    #[serde(default = "default_ipv6_services")]
    pub ipv6_services: Vec<String>,

    /// Base URL of the dyndns.it update endpoint.
    #[serde(default = "default_dyndns_it_url")]
    pub dyndns_it_url: String,

    /// Base URL of the dynv6.com API.
    #[serde(default = "default_dynv6_url")]
    pub dynv6_url: String,
}

fn default_timeout() -> u64 {
    10
}

fn default_ipv4_services() -> Vec<String> {
    vec![
        "https://ipinfo.io/ip".to_string(),
        "https://checkip.amazonaws.com/".to_string(),
        "https://ipv4.seeip.org".to_string(),
        "https://icanhazip.com".to_string(),
        "https://wtfismyip.com/text".to_string(),
    ]
}

fn default_ipv6_services() -> Vec<String> {
    vec![
        "https://ipv6.seeip.org".to_string(),
        "https://ipv6.icanhazip.com/".to_string(),
    ]
}

fn default_dyndns_it_url() -> String {
    "https://update.dyndns.it".to_string()
}

fn default_dynv6_url() -> String {
    "https://dynv6.com".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
            ipv4_services: default_ipv4_services(),
            ipv6_services: default_ipv6_services(),
            dyndns_it_url: default_dyndns_it_url(),
            dynv6_url: default_dynv6_url(),
        }
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// Unlike an implicit lookup, an explicitly named file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DdnsError::Config(format!(
                "Config file {} not found",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Build the HTTP client shared by IP detection and the update request.
    pub fn http_client(&self) -> Result<reqwest::Client> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| DdnsError::Config(format!("Cannot build HTTP client: {}", e)))?;
        Ok(client)
    }
}
