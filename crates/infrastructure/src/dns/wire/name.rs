use super::truncated;
use bytes::{BufMut, BytesMut};
use ferrous_stub_domain::DomainError;

/// Upper bound on an encoded name: labels, their length bytes and the root.
pub const MAX_NAME_LEN: usize = 255;
pub const MAX_LABEL_LEN: usize = 63;

const POINTER_TAG: u8 = 0xC0;
const LABEL_TAG: u8 = 0x00;

/// Decodes the name starting at `offset`, following compression pointers.
///
/// Returns the dotted name (empty for the root) and the number of bytes the
/// name occupies at `offset`. Once a pointer has been followed, label bytes
/// at the target no longer count: a pointer always contributes exactly two
/// bytes to the caller's stream and ends the name there.
///
/// Label bytes must be ASCII and must not contain `.`, so the dotted name
/// encodes back to exactly the same labels. Anything else is a
/// `MalformedName`.
///
/// Pointer chains are walked iteratively. A chain with more than
/// `buf.len() / 2` jumps must revisit some pointer, so it is rejected as a
/// loop.
pub fn decode_name(buf: &[u8], offset: usize) -> Result<(String, usize), DomainError> {
    let max_jumps = buf.len() / 2;
    let mut jumps = 0usize;
    let mut pos = offset;
    let mut consumed: Option<usize> = None;
    let mut wire_len = 0usize;
    let mut name = String::new();

    loop {
        let len_byte = *buf.get(pos).ok_or_else(|| truncated(pos + 1, buf.len()))?;

        match len_byte & POINTER_TAG {
            POINTER_TAG => {
                let low = *buf.get(pos + 1).ok_or_else(|| truncated(pos + 2, buf.len()))?;
                if consumed.is_none() {
                    consumed = Some(pos + 2 - offset);
                }

                jumps += 1;
                if jumps > max_jumps {
                    return Err(DomainError::MalformedName(format!(
                        "compression pointer loop at offset {}",
                        pos
                    )));
                }

                let target = (usize::from(len_byte & !POINTER_TAG) << 8) | usize::from(low);
                if target >= buf.len() {
                    return Err(DomainError::MalformedName(format!(
                        "compression pointer to offset {} outside {}-byte message",
                        target,
                        buf.len()
                    )));
                }
                pos = target;
            }
            LABEL_TAG => {
                let len = usize::from(len_byte);
                if len == 0 {
                    let consumed = consumed.unwrap_or(pos + 1 - offset);
                    return Ok((name, consumed));
                }

                wire_len += len + 1;
                if wire_len + 1 > MAX_NAME_LEN {
                    return Err(DomainError::MalformedName(format!(
                        "name exceeds {} bytes",
                        MAX_NAME_LEN
                    )));
                }

                let start = pos + 1;
                let end = start + len;
                let label = buf
                    .get(start..end)
                    .ok_or_else(|| truncated(end, buf.len()))?;

                if let Some(bad) = label.iter().position(|&b| !b.is_ascii() || b == b'.') {
                    return Err(DomainError::MalformedName(format!(
                        "label byte 0x{:02x} at offset {} is not a plain ASCII label character",
                        label[bad],
                        start + bad
                    )));
                }

                if !name.is_empty() {
                    name.push('.');
                }
                name.extend(label.iter().map(|&b| char::from(b)));
                pos = end;
            }
            _ => {
                return Err(DomainError::MalformedName(format!(
                    "unsupported label type 0x{:02x} at offset {}",
                    len_byte, pos
                )));
            }
        }
    }
}

/// Writes `name` as length-prefixed labels followed by the root byte.
///
/// Output is never compressed. Empty labels (a trailing dot, or the empty
/// root name) are skipped.
pub fn write_name(name: &str, out: &mut BytesMut) -> Result<(), DomainError> {
    let mut wire_len = 1usize;

    for label in name.split('.').filter(|label| !label.is_empty()) {
        if label.len() > MAX_LABEL_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "label '{}' is {} bytes, limit is {}",
                label,
                label.len(),
                MAX_LABEL_LEN
            )));
        }

        wire_len += label.len() + 1;
        if wire_len > MAX_NAME_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}' exceeds {} bytes in wire form",
                name, MAX_NAME_LEN
            )));
        }

        out.put_u8(label.len() as u8);
        out.put_slice(label.as_bytes());
    }

    out.put_u8(0);
    Ok(())
}

pub fn encode_name(name: &str) -> Result<Vec<u8>, DomainError> {
    let mut out = BytesMut::with_capacity(name.len() + 2);
    write_name(name, &mut out)?;
    Ok(out.to_vec())
}
