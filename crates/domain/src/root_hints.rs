use crate::config::ConfigError;
use std::net::Ipv4Addr;

/// IPv4 addresses of the thirteen root servers (a.root-servers.net … m.root-servers.net).
pub const DEFAULT_ROOT_SERVERS: [Ipv4Addr; 13] = [
    Ipv4Addr::new(198, 41, 0, 4),
    Ipv4Addr::new(199, 9, 14, 201),
    Ipv4Addr::new(192, 33, 4, 12),
    Ipv4Addr::new(199, 7, 91, 13),
    Ipv4Addr::new(192, 203, 230, 10),
    Ipv4Addr::new(192, 5, 5, 241),
    Ipv4Addr::new(192, 112, 36, 4),
    Ipv4Addr::new(198, 97, 190, 53),
    Ipv4Addr::new(192, 36, 148, 17),
    Ipv4Addr::new(192, 58, 128, 30),
    Ipv4Addr::new(193, 0, 14, 129),
    Ipv4Addr::new(199, 7, 83, 42),
    Ipv4Addr::new(202, 12, 27, 33),
];

/// The starting point of an iterative trace. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootHints {
    servers: Vec<Ipv4Addr>,
}

impl RootHints {
    pub fn new(servers: Vec<Ipv4Addr>) -> Result<Self, ConfigError> {
        if servers.is_empty() {
            return Err(ConfigError::Validation(
                "Root hint set cannot be empty".to_string(),
            ));
        }
        Ok(Self { servers })
    }

    /// Parses configured addresses; an empty list falls back to the built-in table.
    pub fn from_config(entries: &[String]) -> Result<Self, ConfigError> {
        if entries.is_empty() {
            return Ok(Self::default());
        }

        let servers = entries
            .iter()
            .map(|entry| {
                entry.parse::<Ipv4Addr>().map_err(|e| {
                    ConfigError::Validation(format!("Invalid root hint '{}': {}", entry, e))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(servers)
    }

    pub fn servers(&self) -> &[Ipv4Addr] {
        &self.servers
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }

    pub fn contains(&self, addr: &Ipv4Addr) -> bool {
        self.servers.contains(addr)
    }
}

impl Default for RootHints {
    fn default() -> Self {
        Self {
            servers: DEFAULT_ROOT_SERVERS.to_vec(),
        }
    }
}
