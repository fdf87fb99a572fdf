use crate::errors::DomainError;
use std::fmt;

/// Size of the fixed DNS message header in bytes.
pub const HEADER_LEN: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    Query,
    InverseQuery,
    Status,
    Notify,
    Update,
    Unassigned(u8),
}

impl Opcode {
    /// Builds an opcode from the low four bits of `value`.
    pub fn from_u8(value: u8) -> Self {
        match value & 0x0F {
            0 => Opcode::Query,
            1 => Opcode::InverseQuery,
            2 => Opcode::Status,
            4 => Opcode::Notify,
            5 => Opcode::Update,
            other => Opcode::Unassigned(other),
        }
    }

    pub fn to_u8(&self) -> u8 {
        match self {
            Opcode::Query => 0,
            Opcode::InverseQuery => 1,
            Opcode::Status => 2,
            Opcode::Notify => 4,
            Opcode::Update => 5,
            Opcode::Unassigned(value) => *value & 0x0F,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Opcode::Query => "QUERY",
            Opcode::InverseQuery => "IQUERY",
            Opcode::Status => "STATUS",
            Opcode::Notify => "NOTIFY",
            Opcode::Update => "UPDATE",
            Opcode::Unassigned(_) => "UNASSIGNED",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Opcode::Unassigned(value) => write!(f, "UNASSIGNED({})", value),
            other => write!(f, "{}", other.as_str()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    NoError,
    FormErr,
    ServFail,
    NXDomain,
    NotImp,
    Refused,
    Unassigned(u8),
}

impl ResponseCode {
    pub fn from_u8(value: u8) -> Self {
        match value & 0x0F {
            0 => ResponseCode::NoError,
            1 => ResponseCode::FormErr,
            2 => ResponseCode::ServFail,
            3 => ResponseCode::NXDomain,
            4 => ResponseCode::NotImp,
            5 => ResponseCode::Refused,
            other => ResponseCode::Unassigned(other),
        }
    }

    pub fn to_u8(&self) -> u8 {
        match self {
            ResponseCode::NoError => 0,
            ResponseCode::FormErr => 1,
            ResponseCode::ServFail => 2,
            ResponseCode::NXDomain => 3,
            ResponseCode::NotImp => 4,
            ResponseCode::Refused => 5,
            ResponseCode::Unassigned(value) => *value & 0x0F,
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseCode::NoError => write!(f, "NOERROR"),
            ResponseCode::FormErr => write!(f, "FORMERR"),
            ResponseCode::ServFail => write!(f, "SERVFAIL"),
            ResponseCode::NXDomain => write!(f, "NXDOMAIN"),
            ResponseCode::NotImp => write!(f, "NOTIMP"),
            ResponseCode::Refused => write!(f, "REFUSED"),
            ResponseCode::Unassigned(value) => write!(f, "RCODE{}", value),
        }
    }
}

/// The fixed 12-byte section at the start of every DNS message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub id: u16,

    /// QR: false for a query, true for a response.
    pub qr: bool,
    pub opcode: Opcode,
    pub aa: bool,
    pub tc: bool,
    pub rd: bool,

    pub ra: bool,
    /// Reserved bits, three of them.
    pub z: u8,
    pub rcode: ResponseCode,

    pub qdcount: u16,
    pub ancount: u16,
    pub nscount: u16,
    pub arcount: u16,
}

impl Header {
    pub fn new(id: u16) -> Self {
        Self {
            id,
            qr: false,
            opcode: Opcode::Query,
            aa: false,
            tc: false,
            rd: false,
            ra: false,
            z: 0,
            rcode: ResponseCode::NoError,
            qdcount: 0,
            ancount: 0,
            nscount: 0,
            arcount: 0,
        }
    }

    /// Only standard queries are answered normally; anything else gets
    /// NOTIMP but is still echoed back.
    pub fn require_standard_query(&self) -> Result<(), DomainError> {
        match self.opcode {
            Opcode::Query => Ok(()),
            other => Err(DomainError::UnsupportedOpcode(other.to_u8())),
        }
    }

    /// Derives the response header for `request`.
    ///
    /// QR is set, AA/TC/RA/Z are cleared, ID/OPCODE/RD are copied over and
    /// RCODE is NOERROR for a standard query or NOTIMP otherwise. Authority
    /// and additional sections are never produced, so their counts are 0.
    pub fn response_to(request: &Header, qdcount: u16, ancount: u16) -> Self {
        let rcode = match request.require_standard_query() {
            Ok(()) => ResponseCode::NoError,
            Err(_) => ResponseCode::NotImp,
        };

        Self {
            id: request.id,
            qr: true,
            opcode: request.opcode,
            aa: false,
            tc: false,
            rd: request.rd,
            ra: false,
            z: 0,
            rcode,
            qdcount,
            ancount,
            nscount: 0,
            arcount: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opcode_roundtrips_through_u8() {
        for value in 0u8..16 {
            assert_eq!(Opcode::from_u8(value).to_u8(), value);
        }
    }

    #[test]
    fn test_opcode_ignores_high_bits() {
        assert_eq!(Opcode::from_u8(0xF1), Opcode::InverseQuery);
    }

    #[test]
    fn test_response_code_roundtrips_through_u8() {
        for value in 0u8..16 {
            assert_eq!(ResponseCode::from_u8(value).to_u8(), value);
        }
    }

    #[test]
    fn test_require_standard_query() {
        let mut header = Header::new(1);
        assert!(header.require_standard_query().is_ok());

        header.opcode = Opcode::Status;
        assert_eq!(
            header.require_standard_query(),
            Err(DomainError::UnsupportedOpcode(2))
        );
    }

    #[test]
    fn test_response_to_clears_server_flags() {
        let mut request = Header::new(0xBEEF);
        request.aa = true;
        request.tc = true;
        request.ra = true;
        request.z = 0b101;
        request.rd = true;
        request.nscount = 3;
        request.arcount = 1;

        let response = Header::response_to(&request, 1, 1);

        assert!(response.qr);
        assert!(!response.aa);
        assert!(!response.tc);
        assert!(!response.ra);
        assert_eq!(response.z, 0);
        assert!(response.rd);
        assert_eq!(response.nscount, 0);
        assert_eq!(response.arcount, 0);
    }
}
