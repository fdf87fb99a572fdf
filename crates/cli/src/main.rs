use clap::Parser;
use ferrous_stub_domain::CliOverrides;
use ferrous_stub_infrastructure::dns::DnsServerHandler;
use std::net::Ipv4Addr;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod server;

#[derive(Parser)]
#[command(name = "ferrous-stub")]
#[command(version)]
#[command(about = "Ferrous Stub - DNS responder answering every query with a fixed A record")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// IPv4 address returned in every answer
    #[arg(short = 'a', long, value_name = "IPV4")]
    answer_ip: Option<Ipv4Addr>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind,
        answer_ipv4: cli.answer_ip,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!("Starting Ferrous Stub v{}", env!("CARGO_PKG_VERSION"));

    let handler = DnsServerHandler::from_config(&config.answer);
    let shutdown = CancellationToken::new();

    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Shutdown signal received");
                signal_token.cancel();
            }
            Err(e) => error!(error = %e, "Failed to listen for shutdown signal"),
        }
    });

    server::start_dns_server(config.server.listen_addr()?, handler, shutdown).await?;

    info!("Server shutdown complete");
    Ok(())
}
