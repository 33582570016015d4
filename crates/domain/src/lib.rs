//! dnsclient Domain Layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod lookup;
pub mod rcode;

pub use config::{CliOverrides, Config, ConfigError, LogFormat, LoggingConfig, QueryConfig};
pub use dns_query::DnsQuery;
pub use dns_record::{DnsRecord, RecordData, RecordType, Section, CLASS_IN};
pub use errors::DomainError;
pub use lookup::{DnsResponse, LookupOutcome, LookupReport, ResponseWarning};
pub use rcode::Rcode;
