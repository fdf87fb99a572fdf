use super::answer::write_record;
use super::header::{parse_header, write_header};
use super::question::{parse_question, write_question};
use bytes::{Bytes, BytesMut};
use ferrous_stub_domain::dns_record::record::DEFAULT_ANSWER_TTL;
use ferrous_stub_domain::{DomainError, Header, Question, ResourceRecord, HEADER_LEN};
use std::net::Ipv4Addr;

/// A parsed query: the header plus every question it announced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub header: Header,
    pub questions: Vec<Question>,
}

/// Parses the header and `qdcount` questions. Any out-of-range read aborts
/// the whole request.
pub fn parse_request(buf: &[u8]) -> Result<Request, DomainError> {
    let header = parse_header(buf)?;

    let mut questions = Vec::new();
    let mut offset = HEADER_LEN;
    for _ in 0..header.qdcount {
        let (question, read) = parse_question(buf, offset)?;
        offset += read;
        questions.push(question);
    }

    Ok(Request { header, questions })
}

/// Serializes the response to `request`: header, all questions, then one A
/// answer per question in the same order.
///
/// Every question gets an A answer pointing at `address`, whatever its
/// QTYPE. Unsupported opcodes still get their sections echoed, with
/// RCODE set to NOTIMP by the header.
pub fn build_response(
    request: &Request,
    address: Ipv4Addr,
    ttl: u32,
) -> Result<Bytes, DomainError> {
    let count = request.questions.len() as u16;
    let header = Header::response_to(&request.header, count, count);

    let mut out = BytesMut::with_capacity(512);
    write_header(&header, &mut out);

    for question in &request.questions {
        write_question(&question.name, &mut out)?;
    }

    for question in &request.questions {
        let answer = ResourceRecord::a(question.name.as_str(), address, ttl);
        write_record(&answer, &mut out)?;
    }

    Ok(out.freeze())
}

/// Turns a raw query datagram into the raw response datagram.
pub fn handle_query(buf: &[u8], address: Ipv4Addr) -> Result<Bytes, DomainError> {
    let request = parse_request(buf)?;
    build_response(&request, address, DEFAULT_ANSWER_TTL)
}
