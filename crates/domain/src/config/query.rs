use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryConfig {
    /// Seconds to wait for a response before retransmitting
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Retransmissions allowed after the first attempt times out
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// UDP port of the DNS server
    #[serde(default = "default_port")]
    pub port: u16,
}

impl QueryConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
            port: default_port(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_max_retries() -> u32 {
    3
}

fn default_port() -> u16 {
    53
}
