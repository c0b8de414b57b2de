pub mod check;

use clap::Parser;
use cgnat_common::config::{Config, DEFAULT_ENDPOINT};

#[derive(Parser)]
#[command(name = "cgnat-check", version)]
#[command(about = "Tells whether this connection sits behind carrier-grade NAT.")]
pub struct CommandLine {
    /// IP-echo service that answers with the caller's address as plain text
    #[arg(long, value_name = "URL", default_value = DEFAULT_ENDPOINT, value_parser = https_endpoint)]
    pub endpoint: String,

    /// Exit right after printing instead of waiting for Enter
    #[arg(long)]
    pub no_wait: bool,

    /// Print more diagnostics on stderr (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn https_endpoint(s: &str) -> Result<String, String> {
    match s.get(..8) {
        Some(scheme) if scheme.eq_ignore_ascii_case("https://") && s.len() > 8 => Ok(s.to_string()),
        _ => Err(format!("'{s}' is not an https:// URL")),
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config {
            endpoint: self.endpoint.clone(),
            wait_for_enter: !self.no_wait,
            ..Config::default()
        }
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
