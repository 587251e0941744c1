#![allow(dead_code)]
use async_trait::async_trait;
use ferrous_dig_application::ports::{
    DnsResponse, NameserverLocator, OutboundQuery, QueryTransport, RandomSource,
};
use ferrous_dig_domain::DomainError;
use std::collections::{HashMap, VecDeque};
use std::net::{IpAddr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct SentQuery {
    pub query: OutboundQuery,
    pub server: SocketAddr,
    pub timeout: Duration,
}

/// Replays scripted results in order and records every query it receives.
pub struct MockQueryTransport {
    script: Mutex<VecDeque<Result<DnsResponse, DomainError>>>,
    sent: Mutex<Vec<SentQuery>>,
}

impl MockQueryTransport {
    pub fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn push_response(&self, response: DnsResponse) {
        self.script.lock().unwrap().push_back(Ok(response));
    }

    pub fn push_error(&self, error: DomainError) {
        self.script.lock().unwrap().push_back(Err(error));
    }

    pub fn sent(&self) -> Vec<SentQuery> {
        self.sent.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl QueryTransport for MockQueryTransport {
    async fn send_query(
        &self,
        query: &OutboundQuery,
        server: SocketAddr,
        timeout: Duration,
    ) -> Result<DnsResponse, DomainError> {
        self.sent.lock().unwrap().push(SentQuery {
            query: query.clone(),
            server,
            timeout,
        });

        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(DomainError::Transport {
                    server: server.to_string(),
                    reason: "no scripted response".to_string(),
                })
            })
    }
}

/// Returns the scripted indices in order, wrapping around, clamped to `len`.
pub struct SequenceRandom {
    picks: Vec<usize>,
    cursor: AtomicUsize,
}

impl SequenceRandom {
    pub fn new(picks: Vec<usize>) -> Self {
        Self {
            picks,
            cursor: AtomicUsize::new(0),
        }
    }

    pub fn first() -> Self {
        Self::new(vec![0])
    }
}

impl RandomSource for SequenceRandom {
    fn pick(&self, len: usize) -> usize {
        let i = self.cursor.fetch_add(1, Ordering::SeqCst);
        let value = self.picks.get(i % self.picks.len().max(1)).copied().unwrap_or(0);
        value.min(len - 1)
    }
}

pub struct MockNameserverLocator {
    known: HashMap<String, IpAddr>,
    lookups: Mutex<Vec<String>>,
}

impl MockNameserverLocator {
    pub fn new() -> Self {
        Self {
            known: HashMap::new(),
            lookups: Mutex::new(Vec::new()),
        }
    }

    pub fn with_host(mut self, host: &str, ip: IpAddr) -> Self {
        self.known.insert(host.to_string(), ip);
        self
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl NameserverLocator for MockNameserverLocator {
    async fn locate(&self, nameserver: &str) -> Result<IpAddr, DomainError> {
        self.lookups.lock().unwrap().push(nameserver.to_string());
        self.known
            .get(nameserver)
            .copied()
            .ok_or_else(|| DomainError::NameserverUnreachable(nameserver.to_string()))
    }
}
