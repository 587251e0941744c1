use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("You must supply at least one domain or hostname to query.")]
    MissingDomains,

    #[error("Invalid hostnames found in the domains: {0}")]
    InvalidDomainName(String),

    #[error("Invalid nameservers found: {0}")]
    InvalidNameserver(String),

    #[error("{0}")]
    MissingField(&'static str),

    #[error("Invalid request body: {0}")]
    InvalidRequest(String),

    #[error("Invalid record type: {0}")]
    InvalidRecordType(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("No answer")]
    NoAnswer,

    #[error("Non-Existent Domain")]
    NxDomain,

    #[error("{0} does not exist.")]
    NoSuchDomain(String),

    #[error("Error {0}")]
    ResolutionError(String),

    #[error("No answer")]
    EmptyAnswer,

    #[error("The DNS query to {server} timed out after {timeout_ms}ms")]
    QueryTimeout { server: String, timeout_ms: u64 },

    #[error("The DNS operation timed out querying {server} for {name}")]
    TraceTimeout { server: String, name: String },

    #[error("All nameservers failed to answer the query {name}: {reason}")]
    ResolutionFailed { name: String, reason: String },

    #[error("Transport error talking to {server}: {reason}")]
    Transport { server: String, reason: String },

    #[error("Unable to locate nameserver {0}")]
    NameserverUnreachable(String),
}

impl DomainError {
    /// Request-level errors reject the whole invocation before any query is sent.
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            DomainError::MissingDomains
                | DomainError::InvalidDomainName(_)
                | DomainError::InvalidNameserver(_)
                | DomainError::MissingField(_)
                | DomainError::InvalidRequest(_)
        )
    }

    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            DomainError::QueryTimeout { .. } | DomainError::TraceTimeout { .. }
        )
    }
}
