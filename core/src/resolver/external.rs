use std::time::Duration;

use async_trait::async_trait;
use cgnat_common::config::Config;
use reqwest::Client;
use tracing::{debug, warn};

use crate::error::NetworkError;
use crate::resolver::ExternalIpSource;

/// Asks a plain-text IP-echo service which address our request came from.
///
/// The HTTP client is only built when the lookup runs, so a broken TLS
/// backend surfaces as an external-IP failure and never ahead of the local
/// lookup.
pub struct HttpEcho {
    endpoint: String,
    timeout: Duration,
}

impl HttpEcho {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.endpoint.clone(), cfg.http_timeout)
    }

    fn client(&self) -> Result<Client, NetworkError> {
        Client::builder()
            .timeout(self.timeout)
            .tcp_nodelay(true)
            .build()
            .map_err(NetworkError::Client)
    }

    fn timed_out(&self) -> NetworkError {
        NetworkError::Timeout {
            target: self.endpoint.clone(),
            timeout: self.timeout,
        }
    }
}

#[async_trait]
impl ExternalIpSource for HttpEcho {
    async fn get_external_ip(&self) -> Result<String, NetworkError> {
        debug!(endpoint = %self.endpoint, "querying IP-echo service");

        let resp = self
            .client()?
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|err| match err.is_timeout() {
                true => self.timed_out(),
                false => NetworkError::Request {
                    endpoint: self.endpoint.clone(),
                    source: err,
                },
            })?;

        let status = resp.status();
        if !status.is_success() {
            warn!(%status, "IP-echo service answered with a non-success status");
        }

        let body = resp.text().await.map_err(|err| match err.is_timeout() {
            true => self.timed_out(),
            false => NetworkError::Body(err),
        })?;

        Ok(body.trim().to_string())
    }
}
