use super::header::DnsHeader;
use super::message_builder::QueryContext;
use super::name_codec::decode_name;
use super::record_decoder::RecordDecoder;
use super::wire::{read_u16, read_u32};
use dnsclient_domain::{
    DnsRecord, DnsResponse, DomainError, LookupOutcome, Rcode, RecordType, ResponseWarning,
    Section, CLASS_IN,
};
use tracing::{debug, warn};

/// Fixed part of a resource record after its owner name: TYPE, CLASS, TTL, RDLENGTH.
const RR_FIXED_LEN: usize = 10;

pub struct ResponseParser;

impl ResponseParser {
    /// Parses the response to the query described by `context`.
    ///
    /// Fatal conditions (ID mismatch, error RCODEs, malformed data) are
    /// returned as errors and no records are kept. Anomalies that do not
    /// prevent reading the message end up in the response's warnings, or
    /// are attached to the error when the RCODE is fatal.
    pub fn parse(
        response_bytes: &[u8],
        context: &QueryContext,
    ) -> Result<LookupOutcome, DomainError> {
        let header = DnsHeader::parse(response_bytes)?;

        if header.id != context.id {
            return Err(DomainError::IdMismatch {
                expected: context.id,
                received: header.id,
            });
        }

        let mut warnings = Vec::new();

        if !header.recursion_available() {
            warn!(id = header.id, "Server does not support recursive queries");
            warnings.push(ResponseWarning::RecursionUnavailable);
        }

        let rcode = header.rcode();
        if rcode.is_fatal() {
            debug!(id = header.id, rcode = %rcode, "Server returned an error");
            return Err(DomainError::ServerError(rcode).with_warnings(warnings));
        }

        match rcode {
            Rcode::NameError if header.authoritative() => {
                debug!(domain = %context.domain, "Authoritative NXDOMAIN");
                return Ok(LookupOutcome::NotFound { warnings });
            }
            Rcode::NameError => return Err(DomainError::NameError.with_warnings(warnings)),
            Rcode::Unknown(code) => {
                warn!(rcode = code, "RCODE outside the range [0,5]");
                warnings.push(ResponseWarning::UnexpectedRcode(code));
            }
            _ => {}
        }

        if header.ancount == 0 && header.arcount == 0 {
            debug!(
                domain = %context.domain,
                nscount = header.nscount,
                "Response carries no answer or additional records"
            );
            return Ok(LookupOutcome::NotFound { warnings });
        }

        let mut offset = context.question_end();
        if offset > response_bytes.len() {
            return Err(DomainError::malformed(format!(
                "response is {} bytes, shorter than header and question ({} bytes)",
                response_bytes.len(),
                offset
            )));
        }

        let mut response = DnsResponse {
            id: header.id,
            authoritative: header.authoritative(),
            recursion_available: header.recursion_available(),
            ancount: header.ancount,
            nscount: header.nscount,
            arcount: header.arcount,
            warnings,
            ..Default::default()
        };

        let ancount = usize::from(header.ancount);
        let nscount = usize::from(header.nscount);

        for index in 0..header.record_count() {
            let section = Section::classify(index, ancount, nscount);

            let (name, after_name) = decode_name(response_bytes, offset)?;
            let type_code = read_u16(response_bytes, after_name)?;
            let class = read_u16(response_bytes, after_name + 2)?;
            let ttl = read_u32(response_bytes, after_name + 4)?;
            let rdlength = usize::from(read_u16(response_bytes, after_name + 8)?);

            let rdata_start = after_name + RR_FIXED_LEN;
            let rdata_end = rdata_start + rdlength;
            if rdata_end > response_bytes.len() {
                return Err(DomainError::malformed(format!(
                    "record {} RDATA ends at offset {}, message is {} bytes",
                    index,
                    rdata_end,
                    response_bytes.len()
                )));
            }
            offset = rdata_end;

            if !section.is_displayed() {
                response.authority_skipped += 1;
                continue;
            }

            if class != CLASS_IN {
                warn!(name = %name, class = class, "Unexpected CLASS in resource record");
                response.warnings.push(ResponseWarning::UnexpectedClass {
                    name: name.clone(),
                    class,
                });
            }

            let Some(record_type) = RecordType::from_u16(type_code) else {
                warn!(name = %name, record_type = type_code, "Skipping record of unsupported type");
                response
                    .warnings
                    .push(ResponseWarning::UnexpectedRecordType {
                        name,
                        code: type_code,
                    });
                continue;
            };

            let data = RecordDecoder::decode(response_bytes, record_type, rdata_start, rdlength)?;
            let record = DnsRecord::new(name, section, class, ttl, data);

            if section == Section::Answer {
                response.answers.push(record);
            } else {
                response.additional.push(record);
            }
        }

        debug!(
            id = response.id,
            answers = response.answers.len(),
            authority = response.authority_skipped,
            additional = response.additional.len(),
            authoritative = response.authoritative,
            "DNS response parsed"
        );

        Ok(LookupOutcome::Found(response))
    }
}
