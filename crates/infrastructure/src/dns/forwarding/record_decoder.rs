//! Type-specific RDATA interpretation for the record types this client shows.

use super::name_codec::decode_name;
use super::wire::read_u16;
use dnsclient_domain::{DomainError, RecordData, RecordType};
use std::net::Ipv4Addr;

pub struct RecordDecoder;

impl RecordDecoder {
    /// Decodes the RDATA occupying `rdlength` bytes at `rdata_start` of `message`.
    ///
    /// Names inside RDATA may point anywhere earlier in the message, so the
    /// whole message is passed rather than just the RDATA slice.
    pub fn decode(
        message: &[u8],
        record_type: RecordType,
        rdata_start: usize,
        rdlength: usize,
    ) -> Result<RecordData, DomainError> {
        let rdata_end = rdata_start + rdlength;
        let rdata = message.get(rdata_start..rdata_end).ok_or_else(|| {
            DomainError::malformed(format!(
                "RDATA at offset {} ({} bytes) runs past the end of the message",
                rdata_start, rdlength
            ))
        })?;

        match record_type {
            RecordType::A => {
                let octets: [u8; 4] = rdata.try_into().map_err(|_| {
                    DomainError::malformed(format!(
                        "A record RDATA is {} bytes, expected 4",
                        rdlength
                    ))
                })?;
                Ok(RecordData::A(Ipv4Addr::from(octets)))
            }
            RecordType::NS => {
                Self::name_within(message, rdata_start, rdata_end).map(RecordData::Ns)
            }
            RecordType::CNAME => {
                Self::name_within(message, rdata_start, rdata_end).map(RecordData::Cname)
            }
            RecordType::MX => {
                let preference = read_u16(rdata, 0)?;
                let exchange = Self::name_within(message, rdata_start + 2, rdata_end)?;
                Ok(RecordData::Mx {
                    preference,
                    exchange,
                })
            }
        }
    }

    /// Decodes a name that must end inside the RDATA it belongs to.
    fn name_within(message: &[u8], start: usize, rdata_end: usize) -> Result<String, DomainError> {
        let (name, next) = decode_name(message, start)?;
        if next > rdata_end {
            return Err(DomainError::malformed(format!(
                "name at offset {} overruns its RDATA (ends at {}, RDATA ends at {})",
                start, next, rdata_end
            )));
        }
        Ok(name)
    }
}
