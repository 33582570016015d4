pub mod errors;
pub mod logging;
pub mod query;
pub mod root;

pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use query::QueryConfig;
pub use root::{CliOverrides, Config, DEFAULT_CONFIG_FILE};
