use async_trait::async_trait;
use ferrous_dig_application::ports::NameserverLocator;
use ferrous_dig_domain::DomainError;
use std::net::IpAddr;
use tracing::debug;

/// Resolves nameserver hostnames through the operating system (getaddrinfo).
///
/// IPv4 results are preferred since root and glue handling is IPv4-only.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemNameserverLocator;

impl SystemNameserverLocator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NameserverLocator for SystemNameserverLocator {
    async fn locate(&self, nameserver: &str) -> Result<IpAddr, DomainError> {
        if let Ok(ip) = nameserver.parse::<IpAddr>() {
            return Ok(ip);
        }

        let host = nameserver.trim_end_matches('.');
        let addrs: Vec<IpAddr> = tokio::net::lookup_host((host, 53))
            .await
            .map_err(|e| DomainError::NameserverUnreachable(format!("{}: {}", nameserver, e)))?
            .map(|addr| addr.ip())
            .collect();

        let chosen = addrs
            .iter()
            .find(|ip| ip.is_ipv4())
            .or_else(|| addrs.first())
            .copied()
            .ok_or_else(|| DomainError::NameserverUnreachable(nameserver.to_string()))?;

        debug!(nameserver = %nameserver, address = %chosen, "Nameserver located");
        Ok(chosen)
    }
}
