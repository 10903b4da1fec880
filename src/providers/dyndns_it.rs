//! dyndns.it provider.

use super::{missing, DdnsProvider, UpdateResult};
use crate::error::Result;
use async_trait::async_trait;

/// dyndns.it provider, authenticated with HTTP basic auth.
pub struct DynDnsItProvider {
    client: reqwest::Client,
    hostname: String,
    username: String,
    password: String,
    base_url: String,
}

impl DynDnsItProvider {
    /// Create a new dyndns.it provider sending updates to `base_url`.
    pub fn new(
        client: reqwest::Client,
        hostname: String,
        username: String,
        password: String,
        base_url: String,
    ) -> Self {
        Self {
            client,
            hostname,
            username,
            password,
            base_url,
        }
    }
}

#[async_trait]
impl DdnsProvider for DynDnsItProvider {
    fn name(&self) -> &'static str {
        "dyndns.it"
    }

    fn hostname(&self) -> &str {
        &self.hostname
    }

    fn validate(&self) -> Result<()> {
        missing(&[
            ("username", self.username.as_str()),
            ("password", self.password.as_str()),
        ])
    }

    async fn update_ip(&self, ipv4: &str, _ipv6: Option<&str>) -> Result<UpdateResult> {
        let url = format!("{}/", self.base_url.trim_end_matches('/'));
        tracing::info!("Updating {} on {} to {}", self.hostname, self.name(), ipv4);

        let response = self
            .client
            .get(&url)
            .query(&[("hostname", self.hostname.as_str()), ("myip", ipv4)])
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        // "good <ip>" is the only accepted answer; "nochg", "badauth" and
        // the rest of the dyndns2 codes are failures here.
        let success = status.is_success() && text.starts_with("good ");
        if !success {
            tracing::warn!("{} rejected update: HTTP {} {}", self.name(), status, text.trim());
        }

        Ok(UpdateResult {
            provider: self.name().to_string(),
            hostname: self.hostname.clone(),
            success,
            status: status.as_u16(),
            response: text,
            ipv4: ipv4.to_string(),
            ipv6: None,
        })
    }
}
