#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use ferrous_dig_api::{create_api_routes, AppState};
use ferrous_dig_application::ports::{
    DnsResponse, NameserverLocator, OutboundQuery, QueryTransport, RandomSource,
};
use ferrous_dig_application::use_cases::{
    DispatchQueryUseCase, HandleLookupUseCase, NsSearchUseCase, TraceDomainUseCase,
};
use ferrous_dig_domain::{DomainError, RecordType, RootHints};
use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{Name, RData, Record};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Answers A queries with a fixed address; servers listed in `unreachable` time out.
pub struct FakeTransport {
    answer: Ipv4Addr,
    unreachable: Vec<IpAddr>,
    calls: AtomicUsize,
}

impl FakeTransport {
    pub fn new(answer: Ipv4Addr) -> Self {
        Self {
            answer,
            unreachable: Vec::new(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn unreachable(mut self, server: IpAddr) -> Self {
        self.unreachable.push(server);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QueryTransport for FakeTransport {
    async fn send_query(
        &self,
        query: &OutboundQuery,
        server: SocketAddr,
        timeout: Duration,
    ) -> Result<DnsResponse, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.unreachable.contains(&server.ip()) {
            return Err(DomainError::QueryTimeout {
                server: server.to_string(),
                timeout_ms: timeout.as_millis() as u64,
            });
        }

        let mut message = Message::new(4321, MessageType::Response, OpCode::Query);
        message.set_response_code(ResponseCode::NoError);
        if query.record_type == RecordType::A {
            let mut owner = Name::from_str(&query.name).unwrap();
            owner.set_fqdn(true);
            message.add_answer(Record::from_rdata(owner, 300, RData::A(A(self.answer))));
        }

        Ok(DnsResponse {
            message,
            wire_size: 60,
        })
    }
}

struct FirstRandom;

impl RandomSource for FirstRandom {
    fn pick(&self, _len: usize) -> usize {
        0
    }
}

struct NoHosts;

#[async_trait]
impl NameserverLocator for NoHosts {
    async fn locate(&self, nameserver: &str) -> Result<IpAddr, DomainError> {
        Err(DomainError::NameserverUnreachable(nameserver.to_string()))
    }
}

pub fn create_test_app(transport: Arc<FakeTransport>) -> Router {
    let trace = Arc::new(TraceDomainUseCase::new(
        transport.clone(),
        Arc::new(RootHints::default()),
        Arc::new(FirstRandom),
        Duration::from_secs(10),
    ));
    let nssearch = Arc::new(NsSearchUseCase::new(
        transport.clone(),
        "127.0.0.53:53".parse().unwrap(),
        Duration::from_secs(5),
    ));
    let dispatcher = Arc::new(DispatchQueryUseCase::new(
        transport,
        Arc::new(NoHosts),
        trace,
        nssearch,
        Duration::from_secs(5),
    ));

    create_api_routes(AppState {
        lookup: Arc::new(HandleLookupUseCase::new(dispatcher)),
    })
}
