use async_trait::async_trait;
use ferrous_dig_domain::DomainError;
use std::net::IpAddr;

/// Turns a caller-supplied nameserver (IP literal or hostname) into an address.
#[async_trait]
pub trait NameserverLocator: Send + Sync {
    async fn locate(&self, nameserver: &str) -> Result<IpAddr, DomainError>;
}
