//! DDNS provider implementations.

mod dyndns_it;
mod dynv6;


pub use dyndns_it::DynDnsItProvider;
pub use dynv6::Dynv6Provider;

use crate::config::Config;
use crate::error::{DdnsError, Result};
use crate::options::Options;
use crate::service::Service;
use async_trait::async_trait;

/// Result of a DNS update operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateResult {
    /// Provider name.
    pub provider: String,
    /// Hostname that was updated.
    pub hostname: String,
    /// Whether the provider accepted the update.
    pub success: bool,
    /// HTTP status code of the update response.
    pub status: u16,
    /// Raw response body.
    pub response: String,
    /// IPv4 address sent.
    pub ipv4: String,
    /// IPv6 address sent, if any.
    pub ipv6: Option<String>,
}

/// Trait for DDNS providers.
#[async_trait]
pub trait DdnsProvider: Send + Sync {
    /// Get the provider name.
    fn name(&self) -> &'static str;

    /// Get the hostname being managed.
    fn hostname(&self) -> &str;

    /// Whether the update should carry an IPv6 address when one is known.
    fn wants_ipv6(&self) -> bool {
        false
    }

    /// Check that the required credentials are present. Never touches the
    /// network.
    fn validate(&self) -> Result<()>;

    /// Send the update request.
    async fn update_ip(&self, ipv4: &str, ipv6: Option<&str>) -> Result<UpdateResult>;
}

/// Create a provider for `service` from the command-line options.
pub fn create_provider(
    service: Service,
    options: &Options,
    config: &Config,
    client: reqwest::Client,
) -> Box<dyn DdnsProvider> {
    let hostname = options.hostname.clone();
    match service {
        Service::DynDnsIt => Box::new(DynDnsItProvider::new(
            client,
            hostname,
            options.username().unwrap_or_default().to_string(),
            options.password().unwrap_or_default().to_string(),
            config.dyndns_it_url.clone(),
        )),
        Service::Dynv6 => Box::new(Dynv6Provider::new(
            client,
            hostname,
            options.token().unwrap_or_default().to_string(),
            config.dynv6_url.clone(),
        )),
    }
}

/// Pick the provider for the hostname and check its credentials.
///
/// Fails before any request is made when the hostname maps to no service
/// or a required credential is empty.
pub fn select_provider(
    options: &Options,
    config: &Config,
    client: reqwest::Client,
) -> Result<Box<dyn DdnsProvider>> {
    let service = Service::resolve(&options.hostname, options.token())
        .ok_or_else(|| DdnsError::UnknownService(options.hostname.clone()))?;
    tracing::debug!("{} maps to {}", options.hostname, service);

    let provider = create_provider(service, options, config, client);
    provider.validate()?;
    Ok(provider)
}

fn missing(fields: &[(&str, &str)]) -> Result<()> {
    let messages: Vec<String> = fields
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(label, _)| format!("Missing {}", label))
        .collect();

    if messages.is_empty() {
        Ok(())
    } else {
        Err(DdnsError::MissingCredentials(messages))
    }
}
