#![allow(dead_code)]
mod dns_server_mock;
mod mock_transport;

pub use dns_server_mock::{MockDnsServer, ServerBehavior};
pub use mock_transport::{MockReply, MockTransport};

use std::net::Ipv4Addr;

/// Minimal answer to `query`: echoes the ID and question, adds one A record
/// pointing back at the question name.
pub fn a_response(query: &[u8], addr: Ipv4Addr) -> Vec<u8> {
    if query.len() < 12 {
        return vec![];
    }

    let mut response = Vec::with_capacity(512);
    response.extend_from_slice(&query[0..2]);
    response.extend_from_slice(&[0x81, 0x80]);
    response.extend_from_slice(&query[4..6]);
    response.extend_from_slice(&[0x00, 0x01]);
    response.extend_from_slice(&[0x00, 0x00]);
    response.extend_from_slice(&[0x00, 0x00]);
    response.extend_from_slice(&query[12..]);

    response.extend_from_slice(&[
        0xc0, 0x0c, // name: pointer to question
        0x00, 0x01, // TYPE A
        0x00, 0x01, // CLASS IN
        0x00, 0x00, 0x00, 0x3c, // TTL 60
        0x00, 0x04,
    ]);
    response.extend_from_slice(&addr.octets());

    response
}
