use super::name::write_name;
use bytes::{BufMut, BytesMut};
use ferrous_stub_domain::dns_record::record::DEFAULT_ANSWER_TTL;
use ferrous_stub_domain::{DomainError, ResourceRecord};
use std::net::Ipv4Addr;

/// Writes a resource record: NAME, TYPE, CLASS, TTL, RDLENGTH, RDATA.
pub fn write_record(record: &ResourceRecord, out: &mut BytesMut) -> Result<(), DomainError> {
    write_name(&record.name, out)?;
    out.put_u16(record.record_type.to_u16());
    out.put_u16(record.class.to_u16());
    out.put_u32(record.ttl);
    out.put_u16(record.rdlength());
    out.put_slice(&record.rdata);
    Ok(())
}

/// Builds the A record answering `name` with `address` and a 60 second TTL.
pub fn build_answer(name: &str, address: Ipv4Addr) -> Result<Vec<u8>, DomainError> {
    build_answer_with_ttl(name, address, DEFAULT_ANSWER_TTL)
}

pub fn build_answer_with_ttl(
    name: &str,
    address: Ipv4Addr,
    ttl: u32,
) -> Result<Vec<u8>, DomainError> {
    let record = ResourceRecord::a(name, address, ttl);
    let mut out = BytesMut::with_capacity(name.len() + 16);
    write_record(&record, &mut out)?;
    Ok(out.to_vec())
}
