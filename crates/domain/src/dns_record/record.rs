use super::{RecordClass, RecordType};
use std::net::Ipv4Addr;

/// TTL attached to every synthesized answer unless configured otherwise.
pub const DEFAULT_ANSWER_TTL: u32 = 60;

/// A resource record as it appears in the answer section.
///
/// Only A records are ever produced; RDLENGTH is derived from `rdata` so the
/// two cannot disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: String,

    pub record_type: RecordType,

    pub class: RecordClass,

    pub ttl: u32,

    pub rdata: Vec<u8>,
}

impl ResourceRecord {
    pub fn a(name: impl Into<String>, address: Ipv4Addr, ttl: u32) -> Self {
        Self {
            name: name.into(),
            record_type: RecordType::A,
            class: RecordClass::IN,
            ttl,
            rdata: address.octets().to_vec(),
        }
    }

    pub fn rdlength(&self) -> u16 {
        self.rdata.len() as u16
    }
}
