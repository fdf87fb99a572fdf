use ferrous_stub_infrastructure::dns::DnsServerHandler;
use std::net::SocketAddr;
use tokio::net::UdpSocket;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// Classic DNS over UDP limit (RFC 1035 §4.2.1).
const MAX_UDP_MESSAGE_SIZE: usize = 512;

pub async fn start_dns_server(
    bind_addr: SocketAddr,
    handler: DnsServerHandler,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let socket = UdpSocket::bind(bind_addr).await?;

    info!(
        bind_address = %socket.local_addr()?,
        answer = %handler.answer(),
        "DNS server ready"
    );

    run_udp_loop(&socket, &handler, shutdown).await;
    Ok(())
}

/// Receives datagrams one at a time until `shutdown` fires. A bad datagram
/// or a failed send only affects that one exchange.
async fn run_udp_loop(
    socket: &UdpSocket,
    handler: &DnsServerHandler,
    shutdown: CancellationToken,
) {
    let mut recv_buf = [0u8; MAX_UDP_MESSAGE_SIZE];

    loop {
        tokio::select! {
            _ = shutdown.cancelled() => {
                info!("DNS server: shutting down");
                break;
            }
            received = socket.recv_from(&mut recv_buf) => {
                match received {
                    Ok((n, from)) => {
                        if let Some(response) = handler.handle(&recv_buf[..n], from) {
                            if let Err(e) = socket.send_to(&response, from).await {
                                warn!(client = %from, error = %e, "Failed to send DNS response");
                            }
                        }
                    }
                    Err(e) => {
                        error!(error = %e, "UDP recv error");
                    }
                }
            }
        }
    }
}
