//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is (no framing). Plain DNS responses are at most 512
//! bytes; the receive buffer leaves headroom for servers that send more.
//!
//! The socket is bound on first use and kept for the lifetime of the
//! transport, so a reply to an earlier attempt that arrives while a
//! retransmission is pending is still received.

use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use dnsclient_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::sync::OnceCell;
use tracing::{debug, warn};

/// Receive buffer size
const MAX_UDP_RESPONSE_SIZE: usize = 1024;

/// DNS over UDP transport
pub struct UdpTransport {
    server_addr: SocketAddr,
    socket: OnceCell<UdpSocket>,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self {
            server_addr,
            socket: OnceCell::new(),
        }
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    /// Local address of the socket, once the first query has bound it.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.socket.get().and_then(|socket| socket.local_addr().ok())
    }

    async fn socket(&self) -> Result<&UdpSocket, DomainError> {
        self.socket
            .get_or_try_init(|| async {
                let socket = UdpSocket::bind(self.bind_addr()).await.map_err(|e| {
                    DomainError::IoError(format!("Failed to bind UDP socket: {}", e))
                })?;
                debug!(
                    server = %self.server_addr,
                    local = ?socket.local_addr().ok(),
                    "UDP socket bound"
                );
                Ok(socket)
            })
            .await
    }

    fn bind_addr(&self) -> SocketAddr {
        // Ephemeral port of the server's address family
        if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        }
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let socket = self.socket().await?;

        let bytes_sent = socket
            .send_to(message_bytes, self.server_addr)
            .await
            .map_err(|e| {
                DomainError::IoError(format!(
                    "Failed to send UDP query to {}: {}",
                    self.server_addr, e
                ))
            })?;

        debug!(
            server = %self.server_addr,
            bytes_sent = bytes_sent,
            "UDP query sent"
        );

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        let (bytes_received, from_addr) =
            tokio::time::timeout(timeout, socket.recv_from(&mut recv_buf))
                .await
                .map_err(|_| DomainError::TransportTimeout {
                    server: self.server_addr.to_string(),
                })?
                .map_err(|e| {
                    DomainError::IoError(format!(
                        "Failed to receive UDP response from {}: {}",
                        self.server_addr, e
                    ))
                })?;

        if from_addr.ip() != self.server_addr.ip() {
            warn!(
                expected = %self.server_addr,
                received_from = %from_addr,
                "UDP response from unexpected source"
            );
        }

        recv_buf.truncate(bytes_received);

        debug!(
            server = %self.server_addr,
            bytes_received = bytes_received,
            "UDP response received"
        );

        Ok(TransportResponse {
            bytes: recv_buf,
            protocol_used: "UDP",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}
