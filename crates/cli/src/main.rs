use clap::Parser;
use dnsclient_domain::{CliOverrides, DnsQuery, RecordType};
use dnsclient_infrastructure::dns::forwarding::{DnsForwarder, QuerySettings};
use dnsclient_infrastructure::dns::transport::UdpTransport;
use std::ffi::OsString;
use std::io;
use std::net::{Ipv4Addr, SocketAddr};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};

mod bootstrap;
mod output;

#[derive(Parser, Debug)]
#[command(name = "dnsclient")]
#[command(version)]
#[command(about = "Send a single DNS query over UDP and print the answer")]
#[command(override_usage = "dnsclient [-t timeout] [-r max-retries] [-p port] [-mx|-ns] @server name")]
struct Cli {
    /// Seconds to wait before retransmitting an unanswered query [default: 5]
    #[arg(short = 't', long = "timeout", value_name = "timeout")]
    timeout: Option<u64>,

    /// Retransmissions of an unanswered query before giving up [default: 3]
    #[arg(short = 'r', long = "max-retries", value_name = "max-retries")]
    max_retries: Option<u32>,

    /// UDP port of the DNS server [default: 53]
    #[arg(short = 'p', long = "port", value_name = "port")]
    port: Option<u16>,

    /// Send an MX (mail server) query
    #[arg(long, conflicts_with = "ns")]
    mx: bool,

    /// Send an NS (name server) query
    #[arg(long)]
    ns: bool,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// IPv4 address of the DNS server, as @a.b.c.d
    #[arg(value_parser = parse_server)]
    server: Ipv4Addr,

    /// Domain name to query for
    name: String,
}

impl Cli {
    fn record_type(&self) -> RecordType {
        if self.mx {
            RecordType::MX
        } else if self.ns {
            RecordType::NS
        } else {
            RecordType::A
        }
    }

    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            timeout_secs: self.timeout,
            max_retries: self.max_retries,
            port: self.port,
            log_level: self.log_level.clone(),
        }
    }
}

fn parse_server(value: &str) -> Result<Ipv4Addr, String> {
    let address = value.strip_prefix('@').unwrap_or(value);
    address
        .parse()
        .map_err(|_| format!("'{}' is not an IPv4 address in a.b.c.d format", address))
}

/// Rewrites the single-dash `-mx` and `-ns` spellings to their long forms.
fn normalize_legacy_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some("-mx") => OsString::from("--mx"),
            Some("-ns") => OsString::from("--ns"),
            _ => arg,
        })
        .collect()
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse_from(normalize_legacy_flags(std::env::args_os()));

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;
    bootstrap::init_logging(&config);

    let query = DnsQuery::new(cli.name.as_str(), cli.record_type());
    let server_addr = SocketAddr::from((cli.server, config.query.port));

    let mut stdout = io::stdout();
    output::write_preamble(&mut stdout, &query, cli.server)?;

    let forwarder = DnsForwarder::new(
        Arc::new(UdpTransport::new(server_addr)),
        QuerySettings::from(&config.query),
    );

    info!(server = %server_addr, query = %query, "Sending query");

    match forwarder.query(&query).await {
        Ok(report) => {
            output::write_report(&mut stdout, &report)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!(error = %e, "Lookup failed");
            output::write_error(&mut stdout, &e)?;
            Ok(ExitCode::FAILURE)
        }
    }
}
