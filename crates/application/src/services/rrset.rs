//! Presentation-format rendering of answer records.

use ferrous_dig_domain::RecordType;
use hickory_proto::rr::{Name, RData, Record};

/// Groups records sharing owner name and type, in order of first appearance.
pub fn group_rrsets(records: &[Record]) -> Vec<Vec<Record>> {
    let mut sets: Vec<Vec<Record>> = Vec::new();

    for record in records {
        let existing = sets.iter_mut().find(|set| {
            set.first().is_some_and(|head| {
                head.name() == record.name() && head.record_type() == record.record_type()
            })
        });

        match existing {
            Some(set) => set.push(record.clone()),
            None => sets.push(vec![record.clone()]),
        }
    }

    sets
}

/// One `name ttl class type rdata` line per record.
pub fn render_rrset(records: &[Record]) -> String {
    records
        .iter()
        .map(|record| record.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Only the rdata of each record, one entry per record.
pub fn render_rdata(records: &[Record]) -> Vec<String> {
    records
        .iter()
        .map(|record| record.data().to_string())
        .collect()
}

pub fn matches_type(record: &Record, record_type: RecordType) -> bool {
    record_type == RecordType::ANY || u16::from(record.record_type()) == record_type.to_u16()
}

/// Picks the answer record set for `qname`, following CNAMEs present in the
/// same answer section. Returns an empty Vec when nothing matches.
pub fn select_answer(answers: &[Record], qname: &Name, record_type: RecordType) -> Vec<Record> {
    let mut current = qname.clone();

    // Each hop consumes a distinct CNAME, so the chain cannot exceed the section size.
    for _ in 0..=answers.len() {
        let matching: Vec<Record> = answers
            .iter()
            .filter(|r| r.name() == &current && matches_type(r, record_type))
            .cloned()
            .collect();

        if !matching.is_empty() {
            return matching;
        }

        let target = answers.iter().find_map(|r| match r.data() {
            RData::CNAME(cname) if r.name() == &current => Some(cname.0.clone()),
            _ => None,
        });

        match target {
            Some(next) => current = next,
            None => break,
        }
    }

    Vec::new()
}
