use crate::ports::{choose, OutboundQuery, QueryTransport, RandomSource};
use crate::services::rrset::{group_rrsets, render_rrset};
use fancy_regex::Regex;
use ferrous_dig_domain::{DomainError, DomainName, RecordType, RootHints};
use hickory_proto::op::Message;
use hickory_proto::rr::RecordType as WireRecordType;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::{Arc, LazyLock};
use std::time::Duration;
use tracing::debug;

static DOTTED_QUAD: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}").ok());

/// One hop of the delegation walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceStep {
    pub suffix: String,
    pub server: Ipv4Addr,
    pub candidates: Vec<Ipv4Addr>,
}

#[derive(Debug, Clone, Default)]
pub struct TraceReport {
    pub steps: Vec<TraceStep>,
    pub final_server: Option<Ipv4Addr>,
    pub records: Vec<String>,
}

/// Walks the delegation chain from a root server down to the full name.
pub struct TraceDomainUseCase {
    transport: Arc<dyn QueryTransport>,
    root_hints: Arc<RootHints>,
    random: Arc<dyn RandomSource>,
    timeout: Duration,
    port: u16,
}

impl TraceDomainUseCase {
    pub fn new(
        transport: Arc<dyn QueryTransport>,
        root_hints: Arc<RootHints>,
        random: Arc<dyn RandomSource>,
        timeout: Duration,
    ) -> Self {
        Self {
            transport,
            root_hints,
            random,
            timeout,
            port: 53,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub async fn execute(&self, domain: &str) -> Result<Vec<String>, DomainError> {
        Ok(self.run(domain).await?.records)
    }

    pub async fn run(&self, domain: &str) -> Result<TraceReport, DomainError> {
        let name = DomainName::parse(domain)?;

        let mut current_server = *choose(self.random.as_ref(), self.root_hints.servers())
            .ok_or_else(|| DomainError::NameserverUnreachable("root hints".to_string()))?;

        let mut report = TraceReport::default();

        for suffix in name.suffix_chain() {
            let response = self
                .query(&suffix, RecordType::NS, current_server)
                .await?;

            let candidates = harvest_glue(&response);
            debug!(
                suffix = %suffix,
                server = %current_server,
                candidates = candidates.len(),
                "Trace step"
            );

            report.steps.push(TraceStep {
                suffix,
                server: current_server,
                candidates: candidates.clone(),
            });

            // Without glue the walk keeps asking the same server.
            if let Some(next) = choose(self.random.as_ref(), &candidates) {
                current_server = *next;
            }
        }

        let fqdn = name.fqdn();
        let response = self.query(&fqdn, RecordType::ANY, current_server).await?;

        report.final_server = Some(current_server);
        report.records = group_rrsets(response.answers())
            .iter()
            .map(|set| render_rrset(set))
            .collect();

        debug!(
            domain = %fqdn,
            server = %current_server,
            rrsets = report.records.len(),
            "Trace finished"
        );

        Ok(report)
    }

    async fn query(
        &self,
        name: &str,
        record_type: RecordType,
        server: Ipv4Addr,
    ) -> Result<Message, DomainError> {
        let query = OutboundQuery::new(name, record_type);
        let target = SocketAddr::new(server.into(), self.port);

        match self.transport.send_query(&query, target, self.timeout).await {
            Ok(response) => Ok(response.message),
            Err(DomainError::QueryTimeout { .. }) => Err(DomainError::TraceTimeout {
                server: server.to_string(),
                name: name.to_string(),
            }),
            Err(e) => Err(e),
        }
    }
}

/// IPv4 addresses found in the additional section, skipping AAAA glue.
pub fn harvest_glue(message: &Message) -> Vec<Ipv4Addr> {
    let Some(pattern) = DOTTED_QUAD.as_ref() else {
        return Vec::new();
    };

    message
        .additionals()
        .iter()
        .filter(|record| record.record_type() != WireRecordType::AAAA)
        .filter_map(|record| {
            let text = record.to_string();
            let found = pattern.find(&text).ok().flatten()?;
            found.as_str().parse::<Ipv4Addr>().ok()
        })
        .collect()
}
