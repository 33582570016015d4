pub mod forwarder;
pub mod header;
pub mod message_builder;
pub mod name_codec;
pub mod record_decoder;
pub mod response_parser;
mod wire;

pub use forwarder::{DnsForwarder, QuerySettings};
pub use header::{DnsHeader, HEADER_LEN};
pub use message_builder::{MessageBuilder, QueryContext};
pub use record_decoder::RecordDecoder;
pub use response_parser::ResponseParser;
