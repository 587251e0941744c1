use clap::{Args, Parser, Subcommand};
use ferrous_dig_api::AppState;
use ferrous_dig_domain::{CliOverrides, LookupRequest, QueryOptions};
use std::net::SocketAddr;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "ferrous-dig")]
#[command(version)]
#[command(about = "Ferrous Dig - DNS lookups, delegation traces and NS/SOA checks over HTTP")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// HTTP port
    #[arg(short = 'p', long, global = true)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long, global = true)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP API (default)
    Serve,
    /// Run one lookup and print the response envelope as JSON
    Query(QueryArgs),
}

#[derive(Args)]
struct QueryArgs {
    /// Domains to look up
    #[arg(required = true)]
    domains: Vec<String>,

    /// Record type; NONE uses the resolver default (A)
    #[arg(short = 't', long = "type", default_value = "NONE")]
    record_type: String,

    /// Nameserver to query (repeatable)
    #[arg(short = 'n', long = "nameserver", required = true)]
    nameservers: Vec<String>,

    #[arg(long)]
    trace: bool,

    #[arg(long)]
    short: bool,

    #[arg(long)]
    norec: bool,

    #[arg(long)]
    dnssec: bool,

    #[arg(long)]
    cdflag: bool,

    #[arg(long)]
    nssearch: bool,
}

impl From<QueryArgs> for LookupRequest {
    fn from(args: QueryArgs) -> Self {
        LookupRequest {
            domains: Some(args.domains),
            record_type: Some(args.record_type),
            nameservers: Some(args.nameservers),
            options: QueryOptions {
                trace: args.trace,
                short: args.short,
                norec: args.norec,
                dnssec: args.dnssec,
                cdflag: args.cdflag,
                nssearch: args.nssearch,
            },
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.bind.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        port = config.server.port,
        bind = %config.server.bind_address,
        resolver_timeout_ms = config.resolver.query_timeout_ms,
        trace_timeout_secs = config.trace.timeout_secs,
        "Configuration loaded"
    );

    let services = di::Services::new(&config).await?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            info!("Starting Ferrous Dig v{}", env!("CARGO_PKG_VERSION"));

            let web_addr: SocketAddr =
                format!("{}:{}", config.server.bind_address, config.server.port).parse()?;
            let app_state = AppState {
                lookup: services.lookup,
            };

            server::start_web_server(web_addr, app_state).await?;
            info!("Server shutdown complete");
        }
        Command::Query(args) => {
            let response =
                ferrous_dig_api::process_lookup(&services.lookup, args.into()).await;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
