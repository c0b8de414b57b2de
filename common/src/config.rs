use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://api.ipify.org";
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(3);
pub const DEFAULT_DIAL_TIMEOUT: Duration = Duration::from_secs(1);
pub const DEFAULT_PROBE_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::new(8, 8, 8, 8), 80));

#[derive(Debug, Clone)]
pub struct Config {
    /// IP-echo service queried for the external address.
    ///
    /// The body of the response is taken verbatim (after trimming) as the address.
    pub endpoint: String,
    /// Upper bound on the whole HTTP exchange, body included.
    pub http_timeout: Duration,
    /// Destination the UDP probe "connects" to. Nothing is ever sent there.
    pub probe_addr: SocketAddr,
    pub dial_timeout: Duration,
    /// Block on a line of stdin after printing the report.
    pub wait_for_enter: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            http_timeout: DEFAULT_HTTP_TIMEOUT,
            probe_addr: DEFAULT_PROBE_ADDR,
            dial_timeout: DEFAULT_DIAL_TIMEOUT,
            wait_for_enter: true,
        }
    }
}
