pub mod nameserver_locator;
pub mod resolv_conf;

pub use nameserver_locator::SystemNameserverLocator;
pub use resolv_conf::{discover_system_nameserver, parse_resolv_conf, FALLBACK_NAMESERVER};
