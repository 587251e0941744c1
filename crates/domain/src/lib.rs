//! ferrous-dig domain layer
pub mod config;
pub mod dns_record;
pub mod domain_name;
pub mod errors;
pub mod lookup;
pub mod query_options;
pub mod root_hints;
pub mod validators;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_record::{RecordType, RequestedType};
pub use domain_name::DomainName;
pub use errors::DomainError;
pub use lookup::{
    Answer, DomainResult, LookupRequest, NameserverOutcome, NameserverResult, QueryMetadata,
    ValidatedLookup,
};
pub use query_options::{FlagSet, QueryFlags, QueryMode, QueryOptions};
pub use root_hints::RootHints;
