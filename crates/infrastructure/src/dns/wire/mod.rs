//! DNS wire format codec (RFC 1035 §4).
//!
//! Every parser takes the whole message plus an absolute offset and returns
//! what it decoded together with the number of bytes it consumed at that
//! offset. Nothing here keeps state between calls.

pub mod answer;
pub mod header;
pub mod message;
pub mod name;
pub mod question;

use ferrous_stub_domain::DomainError;

pub(crate) fn truncated(needed: usize, available: usize) -> DomainError {
    DomainError::TruncatedPacket { needed, available }
}

/// Reads a big-endian u16 at `pos`.
pub(crate) fn read_u16(buf: &[u8], pos: usize) -> Result<u16, DomainError> {
    match buf.get(pos..pos + 2) {
        Some(bytes) => Ok(u16::from_be_bytes([bytes[0], bytes[1]])),
        None => Err(truncated(pos + 2, buf.len())),
    }
}
