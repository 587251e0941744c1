use super::response_code::rcode_mnemonic;
use super::rrset::{render_rdata, render_rrset, select_answer};
use crate::ports::{OutboundQuery, QueryTransport};
use ferrous_dig_domain::{DomainError, QueryFlags, RecordType};
use hickory_proto::op::ResponseCode;
use hickory_proto::rr::{Name, Record};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// The answer record set of a plain resolve plus the wire details of the response.
#[derive(Debug, Clone)]
pub struct ResolvedAnswer {
    pub records: Vec<Record>,
    pub msg_size: usize,
    pub query_id: u16,
}

impl ResolvedAnswer {
    pub fn rrset_text(&self) -> String {
        render_rrset(&self.records)
    }

    pub fn record_texts(&self) -> Vec<String> {
        render_rdata(&self.records)
    }
}

/// A resolver that only ever talks to one nameserver.
///
/// Built per (domain, nameserver) pair and discarded afterwards.
pub struct StubResolver {
    transport: Arc<dyn QueryTransport>,
    server: SocketAddr,
    flags: QueryFlags,
    timeout: Duration,
}

impl StubResolver {
    pub fn new(transport: Arc<dyn QueryTransport>, server: SocketAddr, timeout: Duration) -> Self {
        Self {
            transport,
            server,
            flags: QueryFlags::default(),
            timeout,
        }
    }

    pub fn with_flags(mut self, flags: QueryFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn server(&self) -> SocketAddr {
        self.server
    }

    pub async fn resolve(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<ResolvedAnswer, DomainError> {
        let mut qname = Name::from_ascii(name)
            .map_err(|e| DomainError::InvalidDomainName(format!("{name}: {e}")))?;
        qname.set_fqdn(true);

        debug!(
            name = %name,
            record_type = %record_type,
            server = %self.server,
            "Sending stub query"
        );

        let query = OutboundQuery::new(name, record_type).with_flags(self.flags);
        let mut response = self
            .transport
            .send_query(&query, self.server, self.timeout)
            .await?;

        if response.message.truncated() {
            debug!(
                name = %name,
                server = %self.server,
                "Response truncated (TC bit), retrying via TCP"
            );
            response = self
                .transport
                .send_query(&query.over_tcp(), self.server, self.timeout)
                .await?;
        }

        let message = &response.message;
        match message.response_code() {
            ResponseCode::NoError => {}
            ResponseCode::NXDomain => return Err(DomainError::NxDomain),
            other => {
                return Err(DomainError::ResolutionFailed {
                    name: name.to_string(),
                    reason: rcode_mnemonic(other),
                })
            }
        }

        let records = select_answer(message.answers(), &qname, record_type);
        if records.is_empty() {
            return Err(DomainError::NoAnswer);
        }

        Ok(ResolvedAnswer {
            records,
            msg_size: response.wire_size,
            query_id: message.id(),
        })
    }
}
