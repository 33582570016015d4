use super::a_response;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

#[derive(Debug, Clone)]
pub enum ServerBehavior {
    /// Answer every query with one A record.
    Answer(Ipv4Addr),
    /// Ignore the first `n` queries, then answer.
    DropFirst(usize, Ipv4Addr),
    /// Never answer.
    Silent,
    /// Answer with the ID flipped.
    WrongId(Ipv4Addr),
    /// Answer every query, each reply held back for the given delay.
    Delayed(Duration, Ipv4Addr),
}

pub struct MockDnsServer {
    addr: SocketAddr,
    received: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    /// Binds a loopback socket on an ephemeral port and serves until dropped.
    pub async fn start(behavior: ServerBehavior) -> Result<Self, std::io::Error> {
        let socket = Arc::new(UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?);
        let addr = socket.local_addr()?;
        let received = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&received);

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            let seen = counter.fetch_add(1, Ordering::SeqCst) + 1;
                            let Some(response) = Self::respond(&behavior, &buf[..len], seen) else {
                                continue;
                            };
                            let delay = match &behavior {
                                ServerBehavior::Delayed(delay, _) => *delay,
                                _ => Duration::ZERO,
                            };
                            if delay.is_zero() {
                                let _ = socket.send_to(&response, peer).await;
                            } else {
                                let socket = Arc::clone(&socket);
                                tokio::spawn(async move {
                                    tokio::time::sleep(delay).await;
                                    let _ = socket.send_to(&response, peer).await;
                                });
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            received,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Number of datagrams received so far.
    pub fn received(&self) -> usize {
        self.received.load(Ordering::SeqCst)
    }

    fn respond(behavior: &ServerBehavior, query: &[u8], seen: usize) -> Option<Vec<u8>> {
        match behavior {
            ServerBehavior::Answer(addr) | ServerBehavior::Delayed(_, addr) => {
                Some(a_response(query, *addr))
            }
            ServerBehavior::DropFirst(n, addr) => {
                (seen > *n).then(|| a_response(query, *addr))
            }
            ServerBehavior::Silent => None,
            ServerBehavior::WrongId(addr) => {
                let mut response = a_response(query, *addr);
                if response.len() >= 2 {
                    response[0] ^= 0xFF;
                }
                Some(response)
            }
        }
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
