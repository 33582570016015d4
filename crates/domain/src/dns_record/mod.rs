mod record;
mod record_type;
mod section;

pub use record::{DnsRecord, RecordData};
pub use record_type::RecordType;
pub use section::Section;

/// The Internet class; the only class this client ever asks for.
pub const CLASS_IN: u16 = 1;
