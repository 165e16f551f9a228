use anyhow::{anyhow, Context, Result};
use imagegate_types::TranslatorConfig;
use listenfd::ListenFd;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::{IpAddr, SocketAddr};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

const LISTEN_BACKLOG: i32 = 1024;

/// Socket address from `host` and `port`. The host must be an IP literal.
pub fn bind_address(config: &TranslatorConfig) -> Result<SocketAddr> {
    let host = config.get_bind_address();
    let ip: IpAddr =
        host.parse().map_err(|e| anyhow!("Invalid bind address '{}': {}", host, e))?;
    Ok(SocketAddr::new(ip, config.port))
}

/// Listener handed over by systemd (fd 3) if present, otherwise a fresh bind.
pub fn create_listener(config: &TranslatorConfig) -> Result<TcpListener> {
    let mut listenfd = ListenFd::from_env();

    let std_listener = match listenfd.take_tcp_listener(0)? {
        Some(inherited) => {
            info!("🔌 Using systemd socket activation (fd=3)");
            inherited
        },
        None => {
            let addr = bind_address(config)?;
            bind(addr).with_context(|| format!("Failed to bind {}", addr))?
        },
    };

    std_listener.set_nonblocking(true)?;
    Ok(TcpListener::from_std(std_listener)?)
}

fn bind(addr: SocketAddr) -> std::io::Result<std::net::TcpListener> {
    let socket = Socket::new(Domain::for_address(addr), Type::STREAM, Some(Protocol::TCP))?;
    socket.set_reuse_address(true)?;
    socket.bind(&addr.into())?;
    socket.listen(LISTEN_BACKLOG)?;
    Ok(socket.into())
}

/// Resolves on Ctrl+C or SIGTERM. A handler that fails to install is logged
/// and never fires.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("⚠️ Ctrl+C handler unavailable: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            },
            Err(e) => {
                warn!("⚠️ SIGTERM handler unavailable: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("🛑 Received Ctrl+C, shutting down..."),
        () = terminate => info!("🛑 Received SIGTERM, shutting down..."),
    }
}
