use super::{read_u16, truncated};
use bytes::{BufMut, BytesMut};
use ferrous_stub_domain::{DomainError, Header, Opcode, ResponseCode, HEADER_LEN};

const QR_MASK: u8 = 0x80;
const AA_MASK: u8 = 0x04;
const TC_MASK: u8 = 0x02;
const RD_MASK: u8 = 0x01;
const RA_MASK: u8 = 0x80;

/// Parses the fixed header from the first 12 bytes of `buf`.
pub fn parse_header(buf: &[u8]) -> Result<Header, DomainError> {
    if buf.len() < HEADER_LEN {
        return Err(truncated(HEADER_LEN, buf.len()));
    }

    let flags_hi = buf[2];
    let flags_lo = buf[3];

    Ok(Header {
        id: read_u16(buf, 0)?,
        qr: flags_hi & QR_MASK != 0,
        opcode: Opcode::from_u8(flags_hi >> 3),
        aa: flags_hi & AA_MASK != 0,
        tc: flags_hi & TC_MASK != 0,
        rd: flags_hi & RD_MASK != 0,
        ra: flags_lo & RA_MASK != 0,
        z: (flags_lo >> 4) & 0x07,
        rcode: ResponseCode::from_u8(flags_lo),
        qdcount: read_u16(buf, 4)?,
        ancount: read_u16(buf, 6)?,
        nscount: read_u16(buf, 8)?,
        arcount: read_u16(buf, 10)?,
    })
}

pub fn encode_header(header: &Header) -> [u8; HEADER_LEN] {
    let mut flags_hi = (header.opcode.to_u8() & 0x0F) << 3;
    if header.qr {
        flags_hi |= QR_MASK;
    }
    if header.aa {
        flags_hi |= AA_MASK;
    }
    if header.tc {
        flags_hi |= TC_MASK;
    }
    if header.rd {
        flags_hi |= RD_MASK;
    }

    let mut flags_lo = ((header.z & 0x07) << 4) | (header.rcode.to_u8() & 0x0F);
    if header.ra {
        flags_lo |= RA_MASK;
    }

    let mut out = [0u8; HEADER_LEN];
    out[0..2].copy_from_slice(&header.id.to_be_bytes());
    out[2] = flags_hi;
    out[3] = flags_lo;
    out[4..6].copy_from_slice(&header.qdcount.to_be_bytes());
    out[6..8].copy_from_slice(&header.ancount.to_be_bytes());
    out[8..10].copy_from_slice(&header.nscount.to_be_bytes());
    out[10..12].copy_from_slice(&header.arcount.to_be_bytes());
    out
}

pub fn write_header(header: &Header, out: &mut BytesMut) {
    out.put_slice(&encode_header(header));
}

/// Builds the wire header answering `request`. See [`Header::response_to`]
/// for which fields are copied and which are forced.
pub fn build_response_header(request: &Header, qdcount: u16, ancount: u16) -> [u8; HEADER_LEN] {
    encode_header(&Header::response_to(request, qdcount, ancount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header_fields() {
        let buf = [
            0x30, 0x39, // ID = 12345
            0x01, 0x00, // RD
            0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ];
        let header = parse_header(&buf).unwrap();

        assert_eq!(header.id, 12345);
        assert!(!header.qr);
        assert_eq!(header.opcode, Opcode::Query);
        assert!(header.rd);
        assert!(!header.ra);
        assert_eq!(header.rcode, ResponseCode::NoError);
        assert_eq!(header.qdcount, 1);
        assert_eq!(header.ancount, 0);
    }

    #[test]
    fn test_parse_header_all_flag_bits() {
        // QR=1 OPCODE=2 AA=1 TC=1 RD=1 | RA=1 Z=0b101 RCODE=3
        let buf = [0x00, 0x01, 0x97, 0xD3, 0, 0, 0, 0, 0, 0, 0, 0];
        let header = parse_header(&buf).unwrap();

        assert!(header.qr);
        assert_eq!(header.opcode, Opcode::Status);
        assert!(header.aa);
        assert!(header.tc);
        assert!(header.rd);
        assert!(header.ra);
        assert_eq!(header.z, 0b101);
        assert_eq!(header.rcode, ResponseCode::NXDomain);
    }

    #[test]
    fn test_encode_header_reproduces_input() {
        let buf = [0xAB, 0xCD, 0x97, 0xD3, 0x00, 0x02, 0x00, 0x03, 0x00, 0x04, 0x00, 0x05];
        let header = parse_header(&buf).unwrap();
        assert_eq!(encode_header(&header), buf);
    }

    #[test]
    fn test_parse_header_short_buffer() {
        let err = parse_header(&[0u8; 11]).unwrap_err();
        assert_eq!(
            err,
            DomainError::TruncatedPacket {
                needed: 12,
                available: 11
            }
        );
    }

    #[test]
    fn test_response_header_standard_query() {
        let mut request = Header::new(0x3039);
        request.rd = true;
        request.qdcount = 1;

        let wire = build_response_header(&request, 1, 1);

        assert_eq!(&wire[0..2], &[0x30, 0x39]);
        // QR=1, OPCODE=0, RD=1
        assert_eq!(wire[2], 0x81);
        // RA=0, Z=0, RCODE=0
        assert_eq!(wire[3], 0x00);
        assert_eq!(&wire[4..12], &[0, 1, 0, 1, 0, 0, 0, 0]);
    }

    #[test]
    fn test_response_header_unsupported_opcode() {
        let mut request = Header::new(7);
        request.opcode = Opcode::InverseQuery;

        let wire = build_response_header(&request, 0, 0);

        // QR=1, OPCODE=1
        assert_eq!(wire[2], 0x88);
        assert_eq!(wire[3] & 0x0F, 4);
    }
}
