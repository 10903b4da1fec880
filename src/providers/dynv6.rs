//! dynv6.com provider.

use super::{missing, DdnsProvider, UpdateResult};
use crate::error::Result;
use async_trait::async_trait;

/// dynv6.com provider, authenticated with an HTTP token.
pub struct Dynv6Provider {
    client: reqwest::Client,
    hostname: String,
    token: String,
    base_url: String,
}

impl Dynv6Provider {
    /// Create a new dynv6.com provider; `base_url` is the API root.
    pub fn new(
        client: reqwest::Client,
        hostname: String,
        token: String,
        base_url: String,
    ) -> Self {
        Self {
            client,
            hostname,
            token,
            base_url,
        }
    }
}

#[async_trait]
impl DdnsProvider for Dynv6Provider {
    fn name(&self) -> &'static str {
        "dynv6.com"
    }

    fn hostname(&self) -> &str {
        &self.hostname
    }

    fn wants_ipv6(&self) -> bool {
        true
    }

    fn validate(&self) -> Result<()> {
        missing(&[("HTTP token", self.token.as_str())])
    }

    async fn update_ip(&self, ipv4: &str, ipv6: Option<&str>) -> Result<UpdateResult> {
        let url = format!("{}/api/update", self.base_url.trim_end_matches('/'));
        let ipv6 = ipv6.filter(|ip| !ip.is_empty());

        let mut query = vec![
            ("zone", self.hostname.as_str()),
            ("ipv4", ipv4),
            ("token", self.token.as_str()),
        ];
        if let Some(ipv6) = ipv6 {
            query.push(("ipv6", ipv6));
        }

        tracing::info!(
            "Updating {} on {} to {} / {}",
            self.hostname,
            self.name(),
            ipv4,
            ipv6.unwrap_or("-")
        );

        let response = self.client.get(&url).query(&query).send().await?;

        let status = response.status();
        let text = response.text().await?;

        // dynv6 answers in free text; only the status decides.
        let success = status.is_success();
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
            ipv6: ipv6.map(str::to_string),
        })
    }
}
