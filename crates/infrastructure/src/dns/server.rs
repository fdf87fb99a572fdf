use super::wire::message::{build_response, parse_request};
use bytes::Bytes;
use ferrous_stub_domain::config::AnswerConfig;
use ferrous_stub_domain::ResponseCode;
use std::net::{Ipv4Addr, SocketAddr};
use tracing::{debug, warn};

/// Entry point for the transport layer: raw query in, raw response out.
///
/// Holds no per-datagram state, so one handler can be shared by any number
/// of concurrent receive tasks.
#[derive(Debug, Clone)]
pub struct DnsServerHandler {
    answer: Ipv4Addr,
    ttl: u32,
}

impl DnsServerHandler {
    pub fn new(answer: Ipv4Addr, ttl: u32) -> Self {
        Self { answer, ttl }
    }

    pub fn from_config(config: &AnswerConfig) -> Self {
        Self::new(config.ipv4, config.ttl)
    }

    pub fn answer(&self) -> Ipv4Addr {
        self.answer
    }

    /// Returns the response to send back to `client`, or `None` when the
    /// datagram is dropped.
    pub fn handle(&self, raw: &[u8], client: SocketAddr) -> Option<Bytes> {
        let request = match parse_request(raw) {
            Ok(request) => request,
            Err(e) => {
                warn!(
                    client = %client,
                    len = raw.len(),
                    error = %e,
                    "Dropping malformed DNS query"
                );
                return None;
            }
        };

        if let Err(e) = request.header.require_standard_query() {
            warn!(
                client = %client,
                id = request.header.id,
                opcode = %request.header.opcode,
                rcode = %ResponseCode::NotImp,
                error = %e,
                "Unsupported opcode"
            );
        }

        for question in &request.questions {
            if !question.is_a_in() {
                debug!(
                    client = %client,
                    domain = %question.name,
                    qtype = %question.type_name(),
                    qclass = %question.class_name(),
                    "Non A/IN question answered with an A record"
                );
            }
        }

        match build_response(&request, self.answer, self.ttl) {
            Ok(response) => {
                debug!(
                    client = %client,
                    id = request.header.id,
                    qdcount = request.questions.len(),
                    bytes = response.len(),
                    "Sending response"
                );
                Some(response)
            }
            Err(e) => {
                warn!(
                    client = %client,
                    id = request.header.id,
                    error = %e,
                    "Failed to encode response"
                );
                None
            }
        }
    }
}
