#![allow(dead_code)]
use ferrous_dig_application::ports::DnsResponse;
use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::{A, NS, SOA};
use hickory_proto::rr::{Name, RData, Record};
use std::net::Ipv4Addr;
use std::str::FromStr;

pub fn name(s: &str) -> Name {
    Name::from_str(s).unwrap()
}

pub fn a_record(owner: &str, ip: Ipv4Addr) -> Record {
    Record::from_rdata(name(owner), 300, RData::A(A(ip)))
}

pub fn ns_record(owner: &str, target: &str) -> Record {
    Record::from_rdata(name(owner), 172800, RData::NS(NS(name(target))))
}

pub fn soa_record(owner: &str) -> Record {
    Record::from_rdata(
        name(owner),
        3600,
        RData::SOA(SOA::new(
            name("ns1.example.com."),
            name("hostmaster.example.com."),
            2024010101,
            7200,
            3600,
            1209600,
            300,
        )),
    )
}

pub struct ResponseBuilder {
    message: Message,
    wire_size: usize,
}

impl ResponseBuilder {
    pub fn new(id: u16) -> Self {
        let mut message = Message::new(id, MessageType::Response, OpCode::Query);
        message.set_response_code(ResponseCode::NoError);
        Self {
            message,
            wire_size: 64,
        }
    }

    pub fn rcode(mut self, rcode: ResponseCode) -> Self {
        self.message.set_response_code(rcode);
        self
    }

    pub fn answer(mut self, record: Record) -> Self {
        self.message.add_answer(record);
        self
    }

    pub fn additional(mut self, record: Record) -> Self {
        self.message.add_additional(record);
        self
    }

    pub fn truncated(mut self) -> Self {
        self.message.set_truncated(true);
        self
    }

    pub fn wire_size(mut self, size: usize) -> Self {
        self.wire_size = size;
        self
    }

    pub fn build(self) -> DnsResponse {
        DnsResponse {
            message: self.message,
            wire_size: self.wire_size,
        }
    }
}

/// A referral carrying A glue for each given address.
pub fn referral(glue: &[Ipv4Addr]) -> DnsResponse {
    glue.iter()
        .enumerate()
        .fold(ResponseBuilder::new(1), |builder, (i, ip)| {
            builder.additional(a_record(&format!("ns{}.example.net.", i + 1), *ip))
        })
        .build()
}
