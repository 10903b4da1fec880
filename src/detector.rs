//! Public IP detection.

use crate::config::Config;
use crate::error::{DdnsError, Result};

/// IP detector with ordered fallback services.
///
/// Responses are not parsed as addresses; whatever the first working
/// service returns, minus line breaks and surrounding whitespace, is used.
pub struct IpDetector {
    client: reqwest::Client,
    ipv4_services: Vec<String>,
    ipv6_services: Vec<String>,
}

impl IpDetector {
    /// Create a detector using the services listed in `config`.
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self::with_services(
            client,
            config.ipv4_services.clone(),
            config.ipv6_services.clone(),
        )
    }

    /// Create a detector with custom services.
    pub fn with_services(
        client: reqwest::Client,
        ipv4_services: Vec<String>,
        ipv6_services: Vec<String>,
    ) -> Self {
        Self {
            client,
            ipv4_services,
            ipv6_services,
        }
    }

    /// Detect public IPv4 address.
    pub async fn detect_ipv4(&self) -> Result<String> {
        self.first_answer(&self.ipv4_services).await.ok_or_else(|| {
            DdnsError::IpDetection("All IPv4 detection services failed".to_string())
        })
    }

    /// Detect public IPv6 address.
    pub async fn detect_ipv6(&self) -> Result<String> {
        self.first_answer(&self.ipv6_services).await.ok_or_else(|| {
            DdnsError::IpDetection("All IPv6 detection services failed".to_string())
        })
    }

    async fn first_answer(&self, services: &[String]) -> Option<String> {
        for service in services {
            match self.try_service(service).await {
                Ok(ip) => {
                    tracing::debug!("Detected {} from {}", ip, service);
                    return Some(ip);
                }
                Err(e) => {
                    tracing::warn!("Service {} failed: {}", service, e);
                }
            }
        }
        None
    }

    /// Try a single IP detection service.
    async fn try_service(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(DdnsError::IpDetection(format!(
                "HTTP {} from {}",
                response.status(),
                url
            )));
        }

        let text = response.text().await?;
        let ip = clean_response(&text);

        if ip.is_empty() {
            return Err(DdnsError::IpDetection(format!("Empty response from {}", url)));
        }
        Ok(ip)
    }
}

fn clean_response(text: &str) -> String {
    text.replace(['\r', '\n'], "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    // Nothing listens on port 1, so this fails at the transport level.
    const DEAD_SERVICE: &str = "http://127.0.0.1:1/ip";

    fn detector(ipv4: Vec<String>, ipv6: Vec<String>) -> IpDetector {
        IpDetector::with_services(reqwest::Client::new(), ipv4, ipv6)
    }

    #[test]
    fn test_clean_response() {
        assert_eq!(clean_response("1.2.3.4\n"), "1.2.3.4");
        assert_eq!(clean_response("  1.2.3.4\r\n"), "1.2.3.4");
        assert_eq!(clean_response("2001:db8::1\n"), "2001:db8::1");
        assert_eq!(clean_response("\r\n"), "");
    }

    #[test]
    fn test_services_from_config() {
        let config = Config::default();
        let detector = IpDetector::new(reqwest::Client::new(), &config);
        assert_eq!(detector.ipv4_services, config.ipv4_services);
        assert_eq!(detector.ipv6_services, config.ipv6_services);
    }

    #[tokio::test]
    async fn test_falls_through_to_first_working_service() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/broken"))
            .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/empty"))
            .respond_with(ResponseTemplate::new(200).set_body_string("\n"))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/ip"))
            .respond_with(ResponseTemplate::new(200).set_body_string("1.2.3.4\n"))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/never"))
            .respond_with(ResponseTemplate::new(200).set_body_string("9.9.9.9"))
            .expect(0)
            .mount(&mock_server)
            .await;

        let detector = detector(
            vec![
                DEAD_SERVICE.to_string(),
                format!("{}/broken", mock_server.uri()),
                format!("{}/empty", mock_server.uri()),
                format!("{}/ip", mock_server.uri()),
                format!("{}/never", mock_server.uri()),
            ],
            vec![],
        );

        assert_eq!(detector.detect_ipv4().await.unwrap(), "1.2.3.4");
    }

    #[tokio::test]
    async fn test_all_services_fail() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let detector = detector(
            vec![DEAD_SERVICE.to_string(), mock_server.uri()],
            vec![mock_server.uri()],
        );

        assert!(matches!(
            detector.detect_ipv4().await,
            Err(DdnsError::IpDetection(_))
        ));
        assert!(matches!(
            detector.detect_ipv6().await,
            Err(DdnsError::IpDetection(_))
        ));
    }

    #[tokio::test]
    async fn test_ipv6_uses_its_own_list() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v6"))
            .respond_with(ResponseTemplate::new(200).set_body_string("2001:db8::1\r\n"))
            .mount(&mock_server)
            .await;

        let detector = detector(
            vec![DEAD_SERVICE.to_string()],
            vec![format!("{}/v6", mock_server.uri())],
        );

        assert_eq!(detector.detect_ipv6().await.unwrap(), "2001:db8::1");
        assert!(detector.detect_ipv4().await.is_err());
    }

    #[tokio::test]
    async fn test_no_services() {
        let detector = detector(vec![], vec![]);
        assert!(detector.detect_ipv4().await.is_err());
    }
}
