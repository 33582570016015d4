use crate::dns_record::{DnsRecord, Section};
use std::fmt;
use std::time::Duration;

/// A non-fatal anomaly noticed while reading a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseWarning {
    RecursionUnavailable,
    UnexpectedRcode(u8),
    UnexpectedClass { name: String, class: u16 },
    UnexpectedRecordType { name: String, code: u16 },
}

impl fmt::Display for ResponseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseWarning::RecursionUnavailable => {
                write!(f, "The server does not support recursive queries.")
            }
            ResponseWarning::UnexpectedRcode(code) => write!(
                f,
                "Unexpected response: RCODE value {} is not within the range [0,5]",
                code
            ),
            ResponseWarning::UnexpectedClass { name, class } => write!(
                f,
                "Unexpected response: The value of the CLASS field for {} is {:#06x}, not 0x0001",
                name, class
            ),
            ResponseWarning::UnexpectedRecordType { name, code } => write!(
                f,
                "Unexpected response: Invalid record type {} for {}",
                code, name
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DnsResponse {
    pub id: u16,

    /// AA bit of the header; every displayed record inherits it.
    pub authoritative: bool,

    pub recursion_available: bool,

    pub ancount: u16,

    pub nscount: u16,

    pub arcount: u16,

    pub answers: Vec<DnsRecord>,

    /// Authority records are walked to keep offsets right but never decoded.
    pub authority_skipped: usize,

    pub additional: Vec<DnsRecord>,

    pub warnings: Vec<ResponseWarning>,
}

impl DnsResponse {
    pub fn records(&self, section: Section) -> &[DnsRecord] {
        match section {
            Section::Answer => &self.answers,
            Section::Additional => &self.additional,
            Section::Authority => &[],
        }
    }

    pub fn auth_label(&self) -> &'static str {
        if self.authoritative {
            "auth"
        } else {
            "nonauth"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(DnsResponse),
    NotFound { warnings: Vec<ResponseWarning> },
}

impl LookupOutcome {
    pub fn not_found() -> Self {
        LookupOutcome::NotFound {
            warnings: Vec::new(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupOutcome::NotFound { .. })
    }

    pub fn response(&self) -> Option<&DnsResponse> {
        match self {
            LookupOutcome::Found(response) => Some(response),
            LookupOutcome::NotFound { .. } => None,
        }
    }

    pub fn warnings(&self) -> &[ResponseWarning] {
        match self {
            LookupOutcome::Found(response) => &response.warnings,
            LookupOutcome::NotFound { warnings } => warnings,
        }
    }
}

/// Result of a full exchange: the parsed outcome plus timing of the attempt that succeeded.
#[derive(Debug, Clone)]
pub struct LookupReport {
    pub outcome: LookupOutcome,

    pub elapsed: Duration,

    pub retries: u32,
}
