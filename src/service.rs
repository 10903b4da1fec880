//! Mapping from hostnames to dynamic DNS services.

use std::fmt;

/// A dynamic DNS service this tool knows how to update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    /// dyndns.it, HTTP basic auth with username and password.
    DynDnsIt,
    /// dynv6.com, HTTP token in the query string.
    Dynv6,
}

/// Domain suffixes handed out by each service.
const SUFFIXES: &[(Service, &[&str])] = &[
    (
        Service::Dynv6,
        &[
            "dns.army",
            "dns.navy",
            "dynv6.net",
            "v6.army",
            "v6.navy",
            "v6.rocks",
        ],
    ),
    (Service::DynDnsIt, &["homepc.it"]),
];

impl Service {
    /// Classify a hostname by the part after its first dot.
    ///
    /// Returns `None` when the hostname has no dot, starts with one, or
    /// its suffix belongs to no known service.
    pub fn from_hostname(hostname: &str) -> Option<Self> {
        let suffix = registrable_suffix(hostname)?;

        SUFFIXES
            .iter()
            .find(|(_, suffixes)| suffixes.contains(&suffix.as_str()))
            .map(|(service, _)| *service)
    }

    /// Classify a hostname, falling back to dynv6 when a token is given.
    pub fn resolve(hostname: &str, token: Option<&str>) -> Option<Self> {
        Self::from_hostname(hostname).or_else(|| {
            token
                .filter(|t| !t.is_empty())
                .map(|_| Service::Dynv6)
        })
    }

    /// Short service name used in logs and results.
    pub fn name(&self) -> &'static str {
        match self {
            Service::DynDnsIt => "dyndns.it",
            Service::Dynv6 => "dynv6.com",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn registrable_suffix(hostname: &str) -> Option<String> {
    match hostname.find('.') {
        Some(idx) if idx > 0 => {
            let suffix = &hostname[idx + 1..];
            (!suffix.is_empty()).then(|| suffix.to_lowercase())
        }
        _ => None,
    }
}
