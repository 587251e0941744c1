use ferrous_dig_application::ports::DnsResponse;
use ferrous_dig_domain::DomainError;
use hickory_proto::op::Message;
use tracing::debug;

pub struct ResponseParser;

impl ResponseParser {
    /// Decodes a wire response, remembering its size on the wire.
    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        debug!(
            id = message.id(),
            rcode = ?message.response_code(),
            answers = message.answers().len(),
            authority = message.name_servers().len(),
            additional = message.additionals().len(),
            truncated = message.truncated(),
            bytes = response_bytes.len(),
            "DNS response parsed"
        );

        Ok(DnsResponse {
            message,
            wire_size: response_bytes.len(),
        })
    }
}
