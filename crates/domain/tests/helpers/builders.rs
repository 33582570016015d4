#![allow(dead_code)]
use dnsclient_domain::{DnsRecord, RecordData, Section, CLASS_IN};
use std::net::Ipv4Addr;

pub struct DnsRecordBuilder {
    name: String,
    section: Section,
    class: u16,
    ttl: u32,
    data: RecordData,
}

impl DnsRecordBuilder {
    pub fn new() -> Self {
        Self {
            name: "example.com".to_string(),
            section: Section::Answer,
            class: CLASS_IN,
            ttl: 300,
            data: RecordData::A(Ipv4Addr::new(192, 0, 2, 1)),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn section(mut self, section: Section) -> Self {
        self.section = section;
        self
    }

    pub fn class(mut self, class: u16) -> Self {
        self.class = class;
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn data(mut self, data: RecordData) -> Self {
        self.data = data;
        self
    }

    pub fn build(self) -> DnsRecord {
        DnsRecord::new(self.name, self.section, self.class, self.ttl, self.data)
    }
}

impl Default for DnsRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}
