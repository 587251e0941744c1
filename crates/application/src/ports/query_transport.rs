use async_trait::async_trait;
use ferrous_dig_domain::{DomainError, QueryFlags, RecordType};
use hickory_proto::op::Message;
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransportProtocol {
    #[default]
    Udp,
    /// Length-prefixed stream (RFC 1035 §4.2.2), used after a truncated UDP answer.
    Tcp,
}

impl fmt::Display for TransportProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportProtocol::Udp => write!(f, "UDP"),
            TransportProtocol::Tcp => write!(f, "TCP"),
        }
    }
}

/// A single question to put on the wire.
#[derive(Debug, Clone)]
pub struct OutboundQuery {
    pub name: String,
    pub record_type: RecordType,
    pub flags: QueryFlags,
    pub protocol: TransportProtocol,
}

impl OutboundQuery {
    pub fn new(name: impl Into<String>, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            record_type,
            flags: QueryFlags::default(),
            protocol: TransportProtocol::Udp,
        }
    }

    pub fn with_flags(mut self, flags: QueryFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn over_tcp(mut self) -> Self {
        self.protocol = TransportProtocol::Tcp;
        self
    }
}

/// A parsed response together with the size it had on the wire.
#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub message: Message,
    pub wire_size: usize,
}

/// Sends one query to one server and waits at most `timeout` for the answer.
///
/// Expiry must surface as `DomainError::QueryTimeout`.
#[async_trait]
pub trait QueryTransport: Send + Sync {
    async fn send_query(
        &self,
        query: &OutboundQuery,
        server: SocketAddr,
        timeout: Duration,
    ) -> Result<DnsResponse, DomainError>;
}
