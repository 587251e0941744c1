mod nameserver_locator;
mod query_transport;
mod random_source;

pub use nameserver_locator::NameserverLocator;
pub use query_transport::{DnsResponse, OutboundQuery, QueryTransport, TransportProtocol};
pub use random_source::{choose, RandomSource};
