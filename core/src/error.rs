use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

/// Everything that can go wrong while talking to the network.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("failed to get external IP from {endpoint}: {source}")]
    Request {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    #[error("{target} did not answer within {timeout:?}")]
    Timeout { target: String, timeout: Duration },

    #[error("failed to open UDP socket: {0}")]
    Bind(#[source] io::Error),

    #[error("failed to dial UDP {target} for local IP: {source}")]
    Dial {
        target: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("failed to read local socket address: {0}")]
    LocalAddr(#[source] io::Error),
}
