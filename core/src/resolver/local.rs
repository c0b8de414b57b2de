use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;

use async_trait::async_trait;
use cgnat_common::config::Config;
use tokio::net::UdpSocket;
use tokio::time;
use tracing::debug;

use crate::error::NetworkError;
use crate::resolver::LocalIpSource;

/// Finds the local address by "connecting" a UDP socket to `target`.
///
/// Connecting a datagram socket sends nothing; it only makes the OS pick a
/// route, and with it the source address we then read back.
pub struct UdpProbe {
    target: SocketAddr,
    timeout: Duration,
}

impl UdpProbe {
    pub fn new(target: SocketAddr, timeout: Duration) -> Self {
        Self { target, timeout }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.probe_addr, cfg.dial_timeout)
    }

    fn bind_addr(&self) -> SocketAddr {
        match self.target {
            SocketAddr::V4(_) => (Ipv4Addr::UNSPECIFIED, 0).into(),
            SocketAddr::V6(_) => (Ipv6Addr::UNSPECIFIED, 0).into(),
        }
    }
}

#[async_trait]
impl LocalIpSource for UdpProbe {
    async fn get_local_ip(&self) -> Result<String, NetworkError> {
        let socket = UdpSocket::bind(self.bind_addr())
            .await
            .map_err(NetworkError::Bind)?;

        time::timeout(self.timeout, socket.connect(self.target))
            .await
            .map_err(|_| NetworkError::Timeout {
                target: self.target.to_string(),
                timeout: self.timeout,
            })?
            .map_err(|source| NetworkError::Dial {
                target: self.target,
                source,
            })?;

        let local = socket.local_addr().map_err(NetworkError::LocalAddr)?;
        debug!(target_addr = %self.target, %local, "UDP probe bound");

        Ok(local.ip().to_string())
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
