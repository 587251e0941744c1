use super::{NsSearchUseCase, TraceDomainUseCase};
use crate::ports::{NameserverLocator, QueryTransport};
use crate::services::StubResolver;
use ferrous_dig_domain::{
    Answer, DomainError, NameserverResult, QueryFlags, QueryMetadata, QueryMode, QueryOptions,
    RequestedType,
};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Runs one (domain, nameserver) unit and always turns it into a result entry.
pub struct DispatchQueryUseCase {
    transport: Arc<dyn QueryTransport>,
    locator: Arc<dyn NameserverLocator>,
    trace: Arc<TraceDomainUseCase>,
    nssearch: Arc<NsSearchUseCase>,
    resolver_timeout: Duration,
    port: u16,
}

impl DispatchQueryUseCase {
    pub fn new(
        transport: Arc<dyn QueryTransport>,
        locator: Arc<dyn NameserverLocator>,
        trace: Arc<TraceDomainUseCase>,
        nssearch: Arc<NsSearchUseCase>,
        resolver_timeout: Duration,
    ) -> Self {
        Self {
            transport,
            locator,
            trace,
            nssearch,
            resolver_timeout,
            port: 53,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub async fn execute(
        &self,
        domain: &str,
        requested: &RequestedType,
        nameserver: &str,
        options: &QueryOptions,
    ) -> NameserverResult {
        match options.mode() {
            QueryMode::Trace => match self.trace.execute(domain).await {
                Ok(records) => NameserverResult::success(nameserver, Answer::List(records), None),
                Err(e) => {
                    warn!(domain = %domain, error = %e, "Trace failed");
                    NameserverResult::failure(nameserver, format!("Trace failed: {}", e))
                }
            },
            QueryMode::NsSearch => match self.nssearch(domain, nameserver, options).await {
                Ok(entries) => NameserverResult::success(nameserver, Answer::List(entries), None),
                Err(e) => Self::failure(domain, nameserver, e),
            },
            QueryMode::Resolve => match self.resolve(domain, requested, nameserver, options).await {
                Ok((answer, metadata)) => {
                    NameserverResult::success(nameserver, answer, Some(metadata))
                }
                Err(e) => Self::failure(domain, nameserver, e),
            },
        }
    }

    async fn nssearch(
        &self,
        domain: &str,
        nameserver: &str,
        options: &QueryOptions,
    ) -> Result<Vec<String>, DomainError> {
        let resolver = self.stub_resolver(nameserver, options).await?;
        self.nssearch.execute(domain, &resolver).await
    }

    async fn resolve(
        &self,
        domain: &str,
        requested: &RequestedType,
        nameserver: &str,
        options: &QueryOptions,
    ) -> Result<(Answer, QueryMetadata), DomainError> {
        let record_type = requested.record_type()?;
        let resolver = self.stub_resolver(nameserver, options).await?;

        let start = Instant::now();
        let resolved = resolver.resolve(domain, record_type).await?;
        let query_time_ms = start.elapsed().as_millis() as u64;

        debug!(
            domain = %domain,
            nameserver = %nameserver,
            record_type = %record_type,
            msg_size = resolved.msg_size,
            query_time_ms,
            "Query answered"
        );

        let answer = if options.short {
            Answer::List(resolved.record_texts())
        } else {
            Answer::Scalar(resolved.rrset_text())
        };

        let metadata = QueryMetadata {
            msg_size: resolved.msg_size,
            query_id: resolved.query_id,
            query_time_ms,
        };

        Ok((answer, metadata))
    }

    async fn stub_resolver(
        &self,
        nameserver: &str,
        options: &QueryOptions,
    ) -> Result<StubResolver, DomainError> {
        let address = match nameserver.parse::<IpAddr>() {
            Ok(ip) => ip,
            Err(_) => self.locator.locate(nameserver).await?,
        };

        Ok(StubResolver::new(
            self.transport.clone(),
            SocketAddr::new(address, self.port),
            self.resolver_timeout,
        )
        .with_flags(QueryFlags::from_options(options)))
    }

    fn failure(domain: &str, nameserver: &str, error: DomainError) -> NameserverResult {
        let reason = match error {
            DomainError::NoAnswer => "No answer".to_string(),
            DomainError::NxDomain => "Non-Existent Domain".to_string(),
            other => {
                warn!(domain = %domain, nameserver = %nameserver, error = %other, "Query failed");
                format!("Query failed: {}", other)
            }
        };
        NameserverResult::failure(nameserver, reason)
    }
}
