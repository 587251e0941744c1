use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::ResolverConfig;
use super::server::ServerConfig;
use super::trace::TraceConfig;
use crate::root_hints::RootHints;

/// Main configuration structure for ferrous-dig
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Stub resolver configuration
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Iterative trace configuration
    #[serde(default)]
    pub trace: TraceConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-dig.toml in current directory
    /// 3. /etc/ferrous-dig/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("ferrous-dig.toml").exists() {
            Self::from_file("ferrous-dig.toml")?
        } else if std::path::Path::new("/etc/ferrous-dig/config.toml").exists() {
            Self::from_file("/etc/ferrous-dig/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("HTTP port cannot be 0".to_string()));
        }

        if self.resolver.port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.resolver.query_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Resolver query timeout must be greater than 0".to_string(),
            ));
        }

        if self.trace.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Trace timeout must be greater than 0".to_string(),
            ));
        }

        if let Some(ns) = &self.resolver.system_nameserver {
            ns.parse::<IpAddr>().map_err(|e| {
                ConfigError::Validation(format!("Invalid system nameserver '{}': {}", ns, e))
            })?;
        }

        self.root_hints()?;

        Ok(())
    }

    pub fn root_hints(&self) -> Result<RootHints, ConfigError> {
        RootHints::from_config(&self.trace.root_hints)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
}
