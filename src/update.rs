//! One update run: pick the provider, find the public IP, push it.

use crate::config::Config;
use crate::detector::IpDetector;
use crate::error::{DdnsError, Result};
use crate::options::Options;
use crate::providers::{select_provider, UpdateResult};

/// Run a single update for `options.hostname`.
///
/// Credentials are checked before any request. A failed IPv4 lookup ends
/// the run; a failed IPv6 lookup only drops the IPv6 parameter. A response
/// the provider did not accept comes back as `DdnsError::UpdateRejected`.
pub async fn run(options: &Options, config: &Config) -> Result<UpdateResult> {
    let client = config.http_client()?;
    let provider = select_provider(options, config, client.clone())?;
    tracing::debug!("Using {} for {}", provider.name(), provider.hostname());

    let detector = IpDetector::new(client, config);
    let ipv4 = detector.detect_ipv4().await?;
    tracing::info!("Public IP address: {}", ipv4);

    let ipv6 = if provider.wants_ipv6() {
        match detector.detect_ipv6().await {
            Ok(ip) => Some(ip),
            Err(e) => {
                tracing::info!("Continuing without IPv6: {}", e);
                None
            }
        }
    } else {
        None
    };

    let result = provider.update_ip(&ipv4, ipv6.as_deref()).await?;
    if !result.success {
        return Err(DdnsError::UpdateRejected(Box::new(result)));
    }

    tracing::info!(
        "{} accepted update for {} (HTTP {})",
        result.provider,
        result.hostname,
        result.status
    );
    Ok(result)
}
