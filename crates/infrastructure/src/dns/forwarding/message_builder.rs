//! DNS Message Builder
//!
//! Constructs query messages in wire format using `hickory-proto`, with the
//! header flags taken from the query's flag configuration.

use super::record_type_map::RecordTypeMapper;
use ferrous_dig_application::ports::OutboundQuery;
use ferrous_dig_domain::DomainError;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;

/// A serialized query and the id needed to match its response.
#[derive(Debug, Clone)]
pub struct BuiltQuery {
    pub id: u16,
    pub bytes: Vec<u8>,
}

pub struct MessageBuilder;

impl MessageBuilder {
    /// Builds a single-question query with a random id.
    ///
    /// Unconfigured flags yield a standard recursive query (RD set).
    pub fn build_query(query: &OutboundQuery) -> Result<BuiltQuery, DomainError> {
        let name = Name::from_str(&query.name).map_err(|e| {
            DomainError::InvalidDomainName(format!("{}: {}", query.name, e))
        })?;

        let mut question = Query::new();
        question.set_name(name);
        question.set_query_type(RecordTypeMapper::to_hickory(&query.record_type));
        question.set_query_class(DNSClass::IN);

        let flags = query.flags.effective();
        let id = fastrand::u16(..);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(flags.recursion_desired);
        message.set_authentic_data(flags.authentic_data);
        message.set_checking_disabled(flags.checking_disabled);
        message.add_query(question);

        let bytes = Self::serialize_message(&message)?;
        Ok(BuiltQuery { id, bytes })
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
