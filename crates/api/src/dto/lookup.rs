use ferrous_dig_domain::{Answer, DomainResult, NameserverOutcome, NameserverResult, QueryOptions};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DomainResultDto {
    pub domain: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub options: QueryOptions,
    pub results: Vec<NameserverResultDto>,
}

/// One nameserver's entry. Failures carry their reason in `answer` and no
/// metadata; only plain lookups fill `msg_size`, `query_id` and `query_time`.
#[derive(Debug, Serialize)]
pub struct NameserverResultDto {
    pub nameserver: String,
    pub answer: Answer,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg_size: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_id: Option<u16>,
    /// Milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_time: Option<u64>,
}

impl From<NameserverResult> for NameserverResultDto {
    fn from(result: NameserverResult) -> Self {
        match result.outcome {
            NameserverOutcome::Success { answer, metadata } => Self {
                nameserver: result.nameserver,
                answer,
                msg_size: metadata.map(|m| m.msg_size),
                query_id: metadata.map(|m| m.query_id),
                query_time: metadata.map(|m| m.query_time_ms),
            },
            NameserverOutcome::Failure { reason } => Self {
                nameserver: result.nameserver,
                answer: Answer::Scalar(reason),
                msg_size: None,
                query_id: None,
                query_time: None,
            },
        }
    }
}

impl From<DomainResult> for DomainResultDto {
    fn from(result: DomainResult) -> Self {
        Self {
            domain: result.domain,
            record_type: result.record_type,
            options: result.options,
            results: result.results.into_iter().map(Into::into).collect(),
        }
    }
}
