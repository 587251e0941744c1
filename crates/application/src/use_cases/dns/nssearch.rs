use crate::ports::{OutboundQuery, QueryTransport};
use crate::services::{rcode_mnemonic, StubResolver};
use ferrous_dig_domain::{DomainError, RecordType};
use hickory_proto::op::ResponseCode;
use hickory_proto::rr::RecordType as WireRecordType;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Finds the NS set through the system resolver, then asks the caller's
/// nameserver for the SOA once per NS record.
pub struct NsSearchUseCase {
    transport: Arc<dyn QueryTransport>,
    system_nameserver: SocketAddr,
    timeout: Duration,
}

impl NsSearchUseCase {
    pub fn new(
        transport: Arc<dyn QueryTransport>,
        system_nameserver: SocketAddr,
        timeout: Duration,
    ) -> Self {
        Self {
            transport,
            system_nameserver,
            timeout,
        }
    }

    pub async fn execute(
        &self,
        domain: &str,
        resolver: &StubResolver,
    ) -> Result<Vec<String>, DomainError> {
        let ns_count = self.count_nameservers(domain).await?;
        debug!(domain = %domain, nameservers = ns_count, "NS set found");

        let mut entries = Vec::with_capacity(ns_count);
        for _ in 0..ns_count {
            match resolver.resolve(domain, RecordType::SOA).await {
                Ok(answer) => entries.push(answer.rrset_text()),
                Err(e) => {
                    warn!(domain = %domain, server = %resolver.server(), error = %e, "SOA query failed");
                    entries.push(format!("Query failed: {}", e));
                }
            }
        }

        Ok(entries)
    }

    async fn count_nameservers(&self, domain: &str) -> Result<usize, DomainError> {
        let query = OutboundQuery::new(domain, RecordType::NS);
        let response = self
            .transport
            .send_query(&query, self.system_nameserver, self.timeout)
            .await?;

        match response.message.response_code() {
            ResponseCode::NoError => {}
            ResponseCode::NXDomain => return Err(DomainError::NoSuchDomain(domain.to_string())),
            other => return Err(DomainError::ResolutionError(rcode_mnemonic(other))),
        }

        let count = response
            .message
            .answers()
            .iter()
            .filter(|record| record.record_type() == WireRecordType::NS)
            .count();

        if count == 0 {
            return Err(DomainError::EmptyAnswer);
        }

        Ok(count)
    }
}
