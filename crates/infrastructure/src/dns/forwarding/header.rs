//! DNS message header (RFC 1035 §4.1.1)
//!
//! ```text
//!   0  1  2  3  4  5  6  7  8  9 10 11 12 13 14 15
//! |QR|   Opcode  |AA|TC|RD|RA|   Z    |   RCODE   |
//! ```

use super::wire::read_u16;
use dnsclient_domain::{DomainError, Rcode};

pub const HEADER_LEN: usize = 12;

pub const FLAG_QR: u16 = 1 << 15;
pub const OPCODE_MASK: u16 = 0x7800;
pub const OPCODE_SHIFT: u16 = 11;
pub const FLAG_AA: u16 = 1 << 10;
pub const FLAG_TC: u16 = 1 << 9;
pub const FLAG_RD: u16 = 1 << 8;
pub const FLAG_RA: u16 = 1 << 7;
pub const Z_MASK: u16 = 0x0070;
pub const Z_SHIFT: u16 = 4;
pub const RCODE_MASK: u16 = 0x000F;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DnsHeader {
    pub id: u16,
    pub flags: u16,
    pub qdcount: u16,
    pub ancount: u16,
    pub nscount: u16,
    pub arcount: u16,
}

impl DnsHeader {
    /// Header of a standard recursive query carrying a single question.
    pub fn query(id: u16) -> Self {
        Self {
            id,
            flags: FLAG_RD,
            qdcount: 1,
            ..Default::default()
        }
    }

    pub fn pack(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.id.to_be_bytes());
        buf.extend_from_slice(&self.flags.to_be_bytes());
        buf.extend_from_slice(&self.qdcount.to_be_bytes());
        buf.extend_from_slice(&self.ancount.to_be_bytes());
        buf.extend_from_slice(&self.nscount.to_be_bytes());
        buf.extend_from_slice(&self.arcount.to_be_bytes());
    }

    pub fn parse(message: &[u8]) -> Result<Self, DomainError> {
        if message.len() < HEADER_LEN {
            return Err(DomainError::malformed(format!(
                "message is {} bytes, shorter than the {}-byte header",
                message.len(),
                HEADER_LEN
            )));
        }

        Ok(Self {
            id: read_u16(message, 0)?,
            flags: read_u16(message, 2)?,
            qdcount: read_u16(message, 4)?,
            ancount: read_u16(message, 6)?,
            nscount: read_u16(message, 8)?,
            arcount: read_u16(message, 10)?,
        })
    }

    pub fn is_response(&self) -> bool {
        self.flags & FLAG_QR != 0
    }

    pub fn opcode(&self) -> u8 {
        ((self.flags & OPCODE_MASK) >> OPCODE_SHIFT) as u8
    }

    pub fn authoritative(&self) -> bool {
        self.flags & FLAG_AA != 0
    }

    pub fn truncated(&self) -> bool {
        self.flags & FLAG_TC != 0
    }

    pub fn recursion_desired(&self) -> bool {
        self.flags & FLAG_RD != 0
    }

    pub fn recursion_available(&self) -> bool {
        self.flags & FLAG_RA != 0
    }

    pub fn z(&self) -> u8 {
        ((self.flags & Z_MASK) >> Z_SHIFT) as u8
    }

    pub fn rcode(&self) -> Rcode {
        Rcode::from_u8((self.flags & RCODE_MASK) as u8)
    }

    /// Number of resource records following the question section.
    pub fn record_count(&self) -> usize {
        usize::from(self.ancount) + usize::from(self.nscount) + usize::from(self.arcount)
    }
}
