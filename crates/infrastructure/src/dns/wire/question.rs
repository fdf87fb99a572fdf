use super::name::{decode_name, write_name};
use super::read_u16;
use bytes::{BufMut, BytesMut};
use ferrous_stub_domain::{DomainError, Question, RecordClass, RecordType};

/// Parses one question at `offset`. Returns it with the bytes consumed
/// (name bytes plus the four QTYPE/QCLASS bytes).
pub fn parse_question(buf: &[u8], offset: usize) -> Result<(Question, usize), DomainError> {
    let (name, name_len) = decode_name(buf, offset)?;
    let fields = offset + name_len;
    let qtype = read_u16(buf, fields)?;
    let qclass = read_u16(buf, fields + 2)?;

    Ok((Question::new(name, qtype, qclass), name_len + 4))
}

/// Writes the question echoed back in a response.
///
/// Only A/IN is ever answered, so QTYPE and QCLASS are always written as
/// A and IN regardless of what the client asked for.
pub fn write_question(name: &str, out: &mut BytesMut) -> Result<(), DomainError> {
    write_name(name, out)?;
    out.put_u16(RecordType::A.to_u16());
    out.put_u16(RecordClass::IN.to_u16());
    Ok(())
}

pub fn build_question(name: &str) -> Result<Vec<u8>, DomainError> {
    let mut out = BytesMut::with_capacity(name.len() + 6);
    write_question(name, &mut out)?;
    Ok(out.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_question_at_offset() {
        let mut buf = vec![0xFFu8; 3];
        buf.extend_from_slice(b"\x01a\x03com\x00\x00\x1C\x00\x01");

        let (question, read) = parse_question(&buf, 3).unwrap();

        assert_eq!(question.name, "a.com");
        assert_eq!(question.qtype, 28);
        assert_eq!(question.qclass, 1);
        assert_eq!(read, 11);
    }

    #[test]
    fn test_parse_question_missing_class() {
        let buf = b"\x01a\x03com\x00\x00\x01\x00";
        let err = parse_question(buf, 0).unwrap_err();
        assert!(matches!(err, DomainError::TruncatedPacket { .. }));
    }

    #[test]
    fn test_build_question_is_always_a_in() {
        let wire = build_question("a.com").unwrap();
        assert_eq!(wire, b"\x01a\x03com\x00\x00\x01\x00\x01");
    }
}
