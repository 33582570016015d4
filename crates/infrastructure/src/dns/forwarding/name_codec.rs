//! Domain name wire codec (RFC 1035 §3.1 and §4.1.4)
//!
//! Names are written uncompressed: one length octet per label followed by the
//! label bytes, terminated by the zero-length root label.
//!
//! Names read from a response may end in a compression pointer, a two-octet
//! back-reference (top bits `11`) whose low 14 bits are an offset from the
//! start of the message. Decoding follows pointers iteratively and gives up
//! with `MalformedMessage` on anything that could loop or read out of bounds.

use dnsclient_domain::DomainError;

/// Maximum length of a single label.
pub const MAX_LABEL_LEN: usize = 63;

/// Maximum length of an encoded name, root label included.
pub const MAX_NAME_LEN: usize = 255;

/// Maximum number of compression pointers followed while decoding one name.
pub const MAX_POINTER_HOPS: usize = 10;

const POINTER_TAG: u8 = 0xC0;
const POINTER_OFFSET_MASK: u8 = 0x3F;

/// Encodes a dotted domain name into wire format.
///
/// A single trailing dot is accepted; `""` and `"."` encode the root name.
pub fn encode_name(name: &str) -> Result<Vec<u8>, DomainError> {
    let trimmed = name.strip_suffix('.').unwrap_or(name);
    let mut buf = Vec::with_capacity(trimmed.len() + 2);

    if !trimmed.is_empty() {
        for label in trimmed.split('.') {
            if label.is_empty() {
                return Err(DomainError::InvalidDomainName(format!(
                    "empty label in '{}'",
                    name
                )));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(DomainError::LabelTooLong {
                    label: label.to_string(),
                    len: label.len(),
                });
            }
            buf.push(label.len() as u8);
            buf.extend_from_slice(label.as_bytes());
        }
    }

    buf.push(0);

    if buf.len() > MAX_NAME_LEN {
        return Err(DomainError::NameTooLong(buf.len()));
    }

    Ok(buf)
}

/// Decodes the name starting at `start` in `message`.
///
/// Returns the dot-joined name and the offset just past the name in the field
/// being read. When the name ends in a pointer, that is the offset after the
/// two pointer octets, however far the pointer chain wandered.
pub fn decode_name(message: &[u8], start: usize) -> Result<(String, usize), DomainError> {
    let mut name = String::new();
    let mut wire_len = 1;
    let mut pos = start;
    let mut field_end: Option<usize> = None;
    let mut hops = 0;

    loop {
        let head = *message.get(pos).ok_or_else(|| {
            DomainError::malformed(format!(
                "name starting at offset {} runs past the end of the message",
                start
            ))
        })?;

        match head {
            0 => {
                pos += 1;
                break;
            }
            0x01..=0x3F => {
                let label_start = pos + 1;
                let label_end = label_start + head as usize;
                let label = message.get(label_start..label_end).ok_or_else(|| {
                    DomainError::malformed(format!(
                        "label at offset {} is truncated ({} octets announced)",
                        pos, head
                    ))
                })?;

                wire_len += label.len() + 1;
                if wire_len > MAX_NAME_LEN {
                    return Err(DomainError::malformed(format!(
                        "name starting at offset {} exceeds {} octets",
                        start, MAX_NAME_LEN
                    )));
                }

                if !name.is_empty() {
                    name.push('.');
                }
                name.extend(label.iter().map(|&b| b as char));
                pos = label_end;
            }
            POINTER_TAG..=0xFF => {
                let low = *message.get(pos + 1).ok_or_else(|| {
                    DomainError::malformed(format!("compression pointer at offset {} is truncated", pos))
                })?;
                let target = (usize::from(head & POINTER_OFFSET_MASK) << 8) | usize::from(low);

                // Pointers may only refer to data before themselves.
                if target >= pos {
                    return Err(DomainError::malformed(format!(
                        "compression pointer at offset {} does not point backwards (target {})",
                        pos, target
                    )));
                }

                hops += 1;
                if hops > MAX_POINTER_HOPS {
                    return Err(DomainError::malformed(format!(
                        "more than {} compression pointers in name starting at offset {}",
                        MAX_POINTER_HOPS, start
                    )));
                }

                field_end.get_or_insert(pos + 2);
                pos = target;
            }
            _ => {
                return Err(DomainError::malformed(format!(
                    "reserved label type {:#04x} at offset {}",
                    head, pos
                )));
            }
        }
    }

    Ok((name, field_end.unwrap_or(pos)))
}
