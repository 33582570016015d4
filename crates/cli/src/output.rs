//! Plain-text rendering of a lookup on stdout.
//!
//! Record lines are tab-separated so the output can be cut or awk'd.

use dnsclient_domain::{
    DnsQuery, DnsRecord, DnsResponse, DomainError, LookupOutcome, LookupReport, RecordData,
    Section,
};
use std::io::{self, Write};
use std::net::Ipv4Addr;

pub fn write_preamble<W: Write>(out: &mut W, query: &DnsQuery, server: Ipv4Addr) -> io::Result<()> {
    writeln!(out, "DnsClient sending request for {}", query.domain)?;
    writeln!(out, "Server: {}", server)?;
    writeln!(out, "Request type: {}", query.record_type)
}

pub fn write_report<W: Write>(out: &mut W, report: &LookupReport) -> io::Result<()> {
    writeln!(
        out,
        "Response received after {:.3} seconds ({} retries)",
        report.elapsed.as_secs_f64(),
        report.retries
    )?;

    for warning in report.outcome.warnings() {
        writeln!(out, "ERROR\t{}", warning)?;
    }

    match &report.outcome {
        LookupOutcome::Found(response) => write_sections(out, response),
        LookupOutcome::NotFound { .. } => writeln!(out, "NOTFOUND"),
    }
}

pub fn write_error<W: Write>(out: &mut W, error: &DomainError) -> io::Result<()> {
    for warning in error.warnings() {
        writeln!(out, "ERROR\t{}", warning)?;
    }

    let root = error.root();
    if root.is_unexpected_response() {
        writeln!(out, "ERROR\tUnexpected response: {}", root)
    } else {
        writeln!(out, "ERROR\t{}", root)
    }
}

fn write_sections<W: Write>(out: &mut W, response: &DnsResponse) -> io::Result<()> {
    let auth = response.auth_label();

    writeln!(out, "***Answer Section ({} records)***", response.ancount)?;
    for record in response.records(Section::Answer) {
        write_record(out, record, auth)?;
    }

    if response.arcount > 0 {
        writeln!(out, "***Additional Section ({} records)***", response.arcount)?;
        for record in response.records(Section::Additional) {
            write_record(out, record, auth)?;
        }
    }

    Ok(())
}

fn write_record<W: Write>(out: &mut W, record: &DnsRecord, auth: &str) -> io::Result<()> {
    match &record.data {
        RecordData::A(addr) => writeln!(out, "IP\t{}\t{}\t{}", addr, record.ttl, auth),
        RecordData::Ns(name) => writeln!(out, "NS\t{}\t{}\t{}", name, record.ttl, auth),
        RecordData::Cname(alias) => writeln!(out, "CNAME\t{}\t{}\t{}", alias, record.ttl, auth),
        RecordData::Mx {
            preference,
            exchange,
        } => writeln!(
            out,
            "MX\t{}\t{}\t{}\t{}",
            exchange, preference, record.ttl, auth
        ),
    }
}
