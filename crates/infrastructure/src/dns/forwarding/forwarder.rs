use super::message_builder::{MessageBuilder, QueryContext};
use super::response_parser::ResponseParser;
use crate::dns::transport::DnsTransport;
use dnsclient_domain::{DnsQuery, DomainError, LookupReport, QueryConfig};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Timing knobs for one lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuerySettings {
    pub timeout: Duration,
    pub max_retries: u32,
}

impl From<&QueryConfig> for QuerySettings {
    fn from(config: &QueryConfig) -> Self {
        Self {
            timeout: config.timeout(),
            max_retries: config.max_retries,
        }
    }
}

/// Sends a query to one server and parses the answer, retransmitting on timeout.
pub struct DnsForwarder {
    transport: Arc<dyn DnsTransport>,
    settings: QuerySettings,
}

impl DnsForwarder {
    pub fn new(transport: Arc<dyn DnsTransport>, settings: QuerySettings) -> Self {
        Self {
            transport,
            settings,
        }
    }

    pub async fn query(&self, query: &DnsQuery) -> Result<LookupReport, DomainError> {
        let (context, request_bytes) =
            MessageBuilder::build_query(&query.domain, query.record_type)?;

        debug!(
            domain = %query.domain,
            record_type = %query.record_type,
            id = context.id,
            bytes = request_bytes.len(),
            "Query built"
        );

        self.exchange(&context, &request_bytes).await
    }

    /// Runs the send/receive loop for an already encoded query.
    ///
    /// The same bytes go out on every attempt. Only a receive timeout is
    /// retried; at most `max_retries + 1` datagrams are sent.
    pub async fn exchange(
        &self,
        context: &QueryContext,
        request_bytes: &[u8],
    ) -> Result<LookupReport, DomainError> {
        let mut retries: u32 = 0;

        loop {
            let started = Instant::now();

            match self
                .transport
                .send(request_bytes, self.settings.timeout)
                .await
            {
                Ok(response) => {
                    let elapsed = started.elapsed();
                    debug!(
                        protocol = response.protocol_used,
                        bytes = response.bytes.len(),
                        elapsed_ms = elapsed.as_millis() as u64,
                        retries,
                        "Response received"
                    );

                    let outcome = ResponseParser::parse(&response.bytes, context)?;
                    return Ok(LookupReport {
                        outcome,
                        elapsed,
                        retries,
                    });
                }
                Err(DomainError::TransportTimeout { server }) => {
                    if retries >= self.settings.max_retries {
                        warn!(
                            server = %server,
                            max_retries = self.settings.max_retries,
                            "Giving up after maximum number of retries"
                        );
                        return Err(DomainError::MaxRetriesExceeded {
                            max_retries: self.settings.max_retries,
                        });
                    }
                    retries += 1;
                    warn!(
                        server = %server,
                        attempt = retries + 1,
                        "Timeout: Retransmitting query"
                    );
                }
                Err(e) => return Err(e),
            }
        }
    }
}
