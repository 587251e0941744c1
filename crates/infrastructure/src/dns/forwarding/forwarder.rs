use super::message_builder::MessageBuilder;
use super::response_parser::ResponseParser;
use crate::dns::transport::tcp::TcpTransport;
use crate::dns::transport::udp::UdpTransport;
use crate::dns::transport::DnsTransport;
use async_trait::async_trait;
use ferrous_dig_application::ports::{
    DnsResponse, OutboundQuery, QueryTransport, TransportProtocol,
};
use ferrous_dig_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::debug;

/// Sends each query over a fresh UDP socket or TCP connection, as the query asks.
#[derive(Debug, Default, Clone, Copy)]
pub struct DnsForwarder;

impl DnsForwarder {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl QueryTransport for DnsForwarder {
    async fn send_query(
        &self,
        query: &OutboundQuery,
        server: SocketAddr,
        timeout: Duration,
    ) -> Result<DnsResponse, DomainError> {
        let built = MessageBuilder::build_query(query)?;

        let transport: Box<dyn DnsTransport> = match query.protocol {
            TransportProtocol::Udp => Box::new(UdpTransport::new(server)),
            TransportProtocol::Tcp => Box::new(TcpTransport::new(server)),
        };

        debug!(
            name = %query.name,
            record_type = %query.record_type,
            server = %server,
            id = built.id,
            protocol = transport.protocol_name(),
            "Forwarding query"
        );

        let raw = transport.send(&built.bytes, timeout).await?;
        let response = ResponseParser::parse(&raw.bytes)?;

        debug!(
            server = %server,
            protocol = raw.protocol_used,
            truncated = response.message.truncated(),
            wire_size = response.wire_size,
            "Response parsed"
        );

        if response.message.id() != built.id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "response id {} does not match query id {}",
                response.message.id(),
                built.id
            )));
        }

        Ok(response)
    }
}
