//! DNS Message Builder
//!
//! Constructs DNS query messages in wire format: a 12-byte header followed by a
//! single question. The builder also hands back a [`QueryContext`] so the
//! response parser can check the transaction ID and skip the echoed question
//! without re-reading it.

use super::header::{DnsHeader, HEADER_LEN};
use super::name_codec::encode_name;
use dnsclient_domain::{DomainError, RecordType, CLASS_IN};
use std::sync::Arc;

/// What the parser needs to know about the query a response answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryContext {
    pub id: u16,

    /// Encoded length of the question section (name + QTYPE + QCLASS).
    pub question_len: usize,

    pub record_type: RecordType,

    pub domain: Arc<str>,
}

impl QueryContext {
    /// Offset of the first resource record in a response to this query.
    pub fn question_end(&self) -> usize {
        HEADER_LEN + self.question_len
    }
}

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a DNS query message with a random transaction ID
    ///
    /// Creates a standard recursive query with:
    /// - Random ID for request/response matching
    /// - RD (Recursion Desired) flag set
    /// - Single question section, class IN
    pub fn build_query(
        domain: &str,
        record_type: RecordType,
    ) -> Result<(QueryContext, Vec<u8>), DomainError> {
        Self::build_query_with_id(fastrand::u16(..), domain, record_type)
    }

    /// Build a query with a caller-chosen transaction ID
    pub fn build_query_with_id(
        id: u16,
        domain: &str,
        record_type: RecordType,
    ) -> Result<(QueryContext, Vec<u8>), DomainError> {
        let question = Self::encode_question(domain, record_type)?;

        let mut buf = Vec::with_capacity(HEADER_LEN + question.len());
        DnsHeader::query(id).pack(&mut buf);
        buf.extend_from_slice(&question);

        let context = QueryContext {
            id,
            question_len: question.len(),
            record_type,
            domain: domain.into(),
        };

        Ok((context, buf))
    }

    fn encode_question(domain: &str, record_type: RecordType) -> Result<Vec<u8>, DomainError> {
        let mut question = encode_name(domain)?;
        question.extend_from_slice(&record_type.to_u16().to_be_bytes());
        question.extend_from_slice(&CLASS_IN.to_be_bytes());
        Ok(question)
    }
}
