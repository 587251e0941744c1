use crate::dns_record::RequestedType;
use crate::errors::DomainError;
use crate::query_options::QueryOptions;
use crate::validators::{is_valid_hostname, is_valid_nameserver};
use serde::{Deserialize, Serialize};

/// Raw lookup request as it arrives over the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LookupRequest {
    #[serde(default)]
    pub domains: Option<Vec<String>>,

    #[serde(default, rename = "type")]
    pub record_type: Option<String>,

    #[serde(default)]
    pub nameservers: Option<Vec<String>>,

    #[serde(flatten)]
    pub options: QueryOptions,
}

impl LookupRequest {
    /// Applies every request-level check. Nothing is queried unless this succeeds.
    pub fn validate(self) -> Result<ValidatedLookup, DomainError> {
        let domains = match self.domains {
            Some(domains) if !domains.is_empty() => domains,
            _ => return Err(DomainError::MissingDomains),
        };

        if let Some(invalid) = domains.iter().find(|d| !is_valid_hostname(d)) {
            return Err(DomainError::InvalidDomainName(invalid.clone()));
        }

        let record_type = self.record_type.ok_or(DomainError::MissingField(
            "You must supply a record type (use NONE for the default).",
        ))?;

        let nameservers = self.nameservers.ok_or(DomainError::MissingField(
            "You must supply the nameservers to query.",
        ))?;

        if let Some(invalid) = nameservers.iter().find(|ns| !is_valid_nameserver(ns)) {
            return Err(DomainError::InvalidNameserver(invalid.clone()));
        }

        Ok(ValidatedLookup {
            domains,
            requested: RequestedType::from_request(&record_type),
            record_type,
            nameservers,
            options: self.options,
        })
    }
}

/// A request that passed validation.
#[derive(Debug, Clone)]
pub struct ValidatedLookup {
    pub domains: Vec<String>,
    /// The `type` field exactly as supplied, echoed back in results.
    pub record_type: String,
    pub requested: RequestedType,
    pub nameservers: Vec<String>,
    pub options: QueryOptions,
}

/// Either a single combined text or one entry per record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Answer {
    Scalar(String),
    List(Vec<String>),
}

/// Timing and wire details, reported on the plain-resolve path only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryMetadata {
    pub msg_size: usize,
    pub query_id: u16,
    pub query_time_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameserverOutcome {
    Success {
        answer: Answer,
        metadata: Option<QueryMetadata>,
    },
    Failure {
        reason: String,
    },
}

impl NameserverOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, NameserverOutcome::Success { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameserverResult {
    pub nameserver: String,
    pub outcome: NameserverOutcome,
}

impl NameserverResult {
    pub fn success(
        nameserver: impl Into<String>,
        answer: Answer,
        metadata: Option<QueryMetadata>,
    ) -> Self {
        Self {
            nameserver: nameserver.into(),
            outcome: NameserverOutcome::Success { answer, metadata },
        }
    }

    pub fn failure(nameserver: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            nameserver: nameserver.into(),
            outcome: NameserverOutcome::Failure {
                reason: reason.into(),
            },
        }
    }

    pub fn metadata(&self) -> Option<&QueryMetadata> {
        match &self.outcome {
            NameserverOutcome::Success { metadata, .. } => metadata.as_ref(),
            NameserverOutcome::Failure { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainResult {
    pub domain: String,
    pub record_type: String,
    pub options: QueryOptions,
    pub results: Vec<NameserverResult>,
}
