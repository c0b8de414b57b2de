//! # Address Sources
//!
//! The checker only knows these two traits, which keeps the network out of
//! its tests. [`local::UdpProbe`] and [`external::HttpEcho`] are the real
//! implementations.

pub mod external;
pub mod local;

use async_trait::async_trait;

use crate::error::NetworkError;

#[async_trait]
pub trait LocalIpSource: Send + Sync {
    /// Address of the interface the OS would route outbound traffic through.
    async fn get_local_ip(&self) -> Result<String, NetworkError>;
}

#[async_trait]
pub trait ExternalIpSource: Send + Sync {
    /// Address as seen from the public internet. Not validated.
    async fn get_external_ip(&self) -> Result<String, NetworkError>;
}
