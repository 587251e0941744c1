//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is (no framing). Truncated responses are returned
//! unchanged; callers decide whether to repeat the query over TCP.

use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use ferrous_dig_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

const MAX_UDP_RESPONSE_SIZE: usize = 4096;

pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    fn transport_error(&self, reason: impl ToString) -> DomainError {
        DomainError::Transport {
            server: self.server_addr.to_string(),
            reason: reason.to_string(),
        }
    }

    fn timeout_error(&self, timeout: Duration) -> DomainError {
        DomainError::QueryTimeout {
            server: self.server_addr.to_string(),
            timeout_ms: timeout.as_millis() as u64,
        }
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let bind_addr: SocketAddr = if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| self.transport_error(format!("failed to bind UDP socket: {}", e)))?;

        // One deadline covers both the send and the wait for the answer.
        let exchange = async {
            let bytes_sent = socket
                .send_to(message_bytes, self.server_addr)
                .await
                .map_err(|e| self.transport_error(format!("failed to send: {}", e)))?;

            debug!(server = %self.server_addr, bytes_sent, "UDP query sent");

            let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
            loop {
                let (bytes_received, from_addr) = socket
                    .recv_from(&mut recv_buf)
                    .await
                    .map_err(|e| self.transport_error(format!("failed to receive: {}", e)))?;

                if from_addr != self.server_addr {
                    warn!(
                        expected = %self.server_addr,
                        received_from = %from_addr,
                        "UDP response from unexpected source"
                    );
                    continue;
                }

                recv_buf.truncate(bytes_received);
                return Ok::<_, DomainError>(recv_buf);
            }
        };

        let bytes = tokio::time::timeout(timeout, exchange)
            .await
            .map_err(|_| self.timeout_error(timeout))??;

        debug!(
            server = %self.server_addr,
            bytes_received = bytes.len(),
            "UDP response received"
        );

        Ok(TransportResponse {
            bytes,
            protocol_used: self.protocol_name(),
        })
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}
