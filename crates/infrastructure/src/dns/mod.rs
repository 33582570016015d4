pub mod forwarding;
pub mod transport;

pub use forwarding::{DnsForwarder, MessageBuilder, QueryContext, QuerySettings, ResponseParser};
pub use transport::{DnsTransport, TransportResponse};
