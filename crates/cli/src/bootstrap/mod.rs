use dnsclient_domain::{CliOverrides, Config, LogFormat};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Loads the config file (if any), applies command-line overrides and validates the result.
pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}

/// Installs the global subscriber. Diagnostics go to stderr; stdout is reserved
/// for the lookup result.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    match config.logging.format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }

    debug!(
        timeout_secs = config.query.timeout_secs,
        max_retries = config.query.max_retries,
        port = config.query.port,
        "Configuration loaded"
    );
}
