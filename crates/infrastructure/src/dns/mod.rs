pub mod forwarding;
pub mod random;
pub mod transport;

pub use forwarding::{DnsForwarder, MessageBuilder, RecordTypeMapper, ResponseParser};
pub use random::FastrandSource;
pub use transport::tcp::TcpTransport;
pub use transport::udp::UdpTransport;
