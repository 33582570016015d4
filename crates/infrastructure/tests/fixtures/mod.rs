#![allow(dead_code)]

pub const TYPE_A: u16 = 1;
pub const TYPE_NS: u16 = 2;
pub const TYPE_CNAME: u16 = 5;
pub const TYPE_SOA: u16 = 6;
pub const TYPE_MX: u16 = 15;
pub const TYPE_AAAA: u16 = 28;

pub const CLASS_IN: u16 = 1;
pub const CLASS_CH: u16 = 3;

/// Pointer to the question name, which always starts right after the header.
pub const PTR_QNAME: [u8; 2] = [0xC0, 0x0C];

/// QR, RD and RA set; NOERROR.
pub const FLAGS_OK: u16 = 0x8180;

pub fn encode(name: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for label in name.split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    out
}

pub fn record(owner: &[u8], rtype: u16, class: u16, ttl: u32, rdata: &[u8]) -> Vec<u8> {
    let mut out = owner.to_vec();
    out.extend_from_slice(&rtype.to_be_bytes());
    out.extend_from_slice(&class.to_be_bytes());
    out.extend_from_slice(&ttl.to_be_bytes());
    out.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
    out.extend_from_slice(rdata);
    out
}

pub fn a_record(owner: &[u8], octets: [u8; 4]) -> Vec<u8> {
    record(owner, TYPE_A, CLASS_IN, 300, &octets)
}

/// Builds a response to a query produced by `MessageBuilder`.
///
/// Records are appended in the order given; the section counts come from
/// the section each record was added to unless overridden.
pub struct ResponseFixture {
    id: u16,
    flags: u16,
    question: Vec<u8>,
    answers: Vec<Vec<u8>>,
    authority: Vec<Vec<u8>>,
    additional: Vec<Vec<u8>>,
    counts: Option<(u16, u16, u16)>,
}

impl ResponseFixture {
    pub fn for_query(query: &[u8]) -> Self {
        Self {
            id: u16::from_be_bytes([query[0], query[1]]),
            flags: FLAGS_OK,
            question: query[12..].to_vec(),
            answers: Vec::new(),
            authority: Vec::new(),
            additional: Vec::new(),
            counts: None,
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn flags(mut self, flags: u16) -> Self {
        self.flags = flags;
        self
    }

    pub fn rcode(mut self, rcode: u8) -> Self {
        self.flags = (self.flags & !0x000F) | u16::from(rcode & 0x0F);
        self
    }

    pub fn authoritative(mut self) -> Self {
        self.flags |= 0x0400;
        self
    }

    pub fn without_recursion(mut self) -> Self {
        self.flags &= !0x0080;
        self
    }

    pub fn answer(mut self, record: Vec<u8>) -> Self {
        self.answers.push(record);
        self
    }

    pub fn authority(mut self, record: Vec<u8>) -> Self {
        self.authority.push(record);
        self
    }

    pub fn additional(mut self, record: Vec<u8>) -> Self {
        self.additional.push(record);
        self
    }

    pub fn counts(mut self, ancount: u16, nscount: u16, arcount: u16) -> Self {
        self.counts = Some((ancount, nscount, arcount));
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let (ancount, nscount, arcount) = self.counts.unwrap_or((
            self.answers.len() as u16,
            self.authority.len() as u16,
            self.additional.len() as u16,
        ));

        let mut out = Vec::with_capacity(512);
        out.extend_from_slice(&self.id.to_be_bytes());
        out.extend_from_slice(&self.flags.to_be_bytes());
        out.extend_from_slice(&1u16.to_be_bytes());
        out.extend_from_slice(&ancount.to_be_bytes());
        out.extend_from_slice(&nscount.to_be_bytes());
        out.extend_from_slice(&arcount.to_be_bytes());
        out.extend_from_slice(&self.question);
        for record in self
            .answers
            .iter()
            .chain(&self.authority)
            .chain(&self.additional)
        {
            out.extend_from_slice(record);
        }
        out
    }
}
