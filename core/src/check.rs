use std::error::Error as StdError;
use std::fmt;
use std::io::{self, Write};

use cgnat_common::config::Config;
use cgnat_common::network::cgnat::{self, CGNAT_BLOCK};
use thiserror::Error;
use tracing::{Instrument, debug, info_span, warn};

use crate::error::NetworkError;
use crate::resolver::external::HttpEcho;
use crate::resolver::local::UdpProbe;
use crate::resolver::{ExternalIpSource, LocalIpSource};

/// Which step of the check failed, and why.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Error getting local IP: {0}")]
    LocalIp(#[source] NetworkError),

    #[error("Error getting external IP: {0}")]
    ExternalIp(#[source] NetworkError),
}

/// Result of one complete run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CgnatReport {
    pub local_ip: String,
    pub external_ip: String,
    pub cgnat: bool,
}

impl CgnatReport {
    pub fn new(local_ip: String, external_ip: String) -> Self {
        let cgnat = cgnat::is_cgnat(&external_ip);
        Self {
            local_ip,
            external_ip,
            cgnat,
        }
    }

    pub fn status(&self) -> &'static str {
        if self.cgnat { "Yes." } else { "No." }
    }
}

impl fmt::Display for CgnatReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Local IP: {}", self.local_ip)?;
        writeln!(f, "External IP: {}", self.external_ip)?;
        write!(f, "CGNAT: {}", self.status())
    }
}

pub struct Checker {
    local: Box<dyn LocalIpSource>,
    external: Box<dyn ExternalIpSource>,
}

impl Checker {
    pub fn new(local: Box<dyn LocalIpSource>, external: Box<dyn ExternalIpSource>) -> Self {
        Self { local, external }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(
            Box::new(UdpProbe::from_config(cfg)),
            Box::new(HttpEcho::from_config(cfg)),
        )
    }

    /// Local address first, then external. The first failure ends the run.
    pub async fn check(&self) -> Result<CgnatReport, CheckError> {
        let local_ip = self
            .local
            .get_local_ip()
            .instrument(info_span!("resolving local IP"))
            .await
            .map_err(CheckError::LocalIp)?;
        debug!(%local_ip, "resolved local address");

        let external_ip = self
            .external
            .get_external_ip()
            .instrument(info_span!("resolving external IP"))
            .await
            .map_err(CheckError::ExternalIp)?;
        debug!(%external_ip, "resolved external address");

        let report = CgnatReport::new(local_ip, external_ip);
        if report.cgnat {
            warn!(
                "External IP {} lies in the shared address space {} (100.64.0.0/10). \
                 Port forwarding and inbound connections will not reach this host.",
                report.external_ip, CGNAT_BLOCK
            );
        }

        Ok(report)
    }
}

/// Renders `err` followed by every cause in its source chain.
///
/// Causes whose text already appears in the message are skipped, since most
/// of our variants inline their direct source.
pub fn error_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

/// Writes the report, or the error that stopped it, as plain lines.
pub fn write_outcome<W: Write>(
    out: &mut W,
    outcome: &Result<CgnatReport, CheckError>,
) -> io::Result<()> {
    match outcome {
        Ok(report) => writeln!(out, "{report}"),
        Err(err) => writeln!(out, "{}", error_chain(err)),
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
