use super::a_response;
use async_trait::async_trait;
use dnsclient_domain::DomainError;
use dnsclient_infrastructure::dns::transport::{DnsTransport, TransportResponse};
use std::collections::VecDeque;
use std::net::Ipv4Addr;
use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum MockReply {
    Timeout,
    Answer(Ipv4Addr),
    Bytes(Vec<u8>),
    Fail(DomainError),
}

/// Transport that plays back a script of replies and records what was sent.
///
/// Once the script runs out every further send times out.
pub struct MockTransport {
    script: Mutex<VecDeque<MockReply>>,
    sent: Mutex<Vec<Vec<u8>>>,
}

impl MockTransport {
    pub fn new(script: impl IntoIterator<Item = MockReply>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.sent.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl DnsTransport for MockTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        _timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        self.sent.lock().unwrap().push(message_bytes.to_vec());

        let reply = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(MockReply::Timeout);

        let bytes = match reply {
            MockReply::Timeout => {
                return Err(DomainError::TransportTimeout {
                    server: "mock".to_string(),
                })
            }
            MockReply::Fail(err) => return Err(err),
            MockReply::Answer(addr) => a_response(message_bytes, addr),
            MockReply::Bytes(bytes) => bytes,
        };

        Ok(TransportResponse {
            bytes,
            protocol_used: "MOCK",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "MOCK"
    }
}
