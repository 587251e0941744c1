//! Configuration module for ferrous-dig
//!
//! - `root`: main configuration, loading and CLI overrides
//! - `server`: HTTP bind address and port
//! - `resolver`: plain-resolve and system resolver settings
//! - `trace`: iterative trace settings and root hints
//! - `logging`: logging settings
//! - `errors`: configuration errors

pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;
pub mod server;
pub mod trace;

pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use trace::TraceConfig;
