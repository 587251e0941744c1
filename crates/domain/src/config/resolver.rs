use serde::{Deserialize, Serialize};

/// Settings for the per-nameserver stub resolver and the system resolver
/// used by NS searches.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Timeout for a single plain-resolve or NS-search query, in milliseconds
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    /// Destination port for every outbound query
    #[serde(default = "default_dns_port")]
    pub port: u16,

    /// Overrides the first `nameserver` entry of /etc/resolv.conf
    #[serde(default)]
    pub system_nameserver: Option<String>,

    #[serde(default = "default_resolv_conf")]
    pub resolv_conf_path: String,
}

fn default_query_timeout_ms() -> u64 {
    5000
}

fn default_dns_port() -> u16 {
    53
}

fn default_resolv_conf() -> String {
    "/etc/resolv.conf".to_string()
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            query_timeout_ms: default_query_timeout_ms(),
            port: default_dns_port(),
            system_nameserver: None,
            resolv_conf_path: default_resolv_conf(),
        }
    }
}
