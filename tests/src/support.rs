use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use cgnat_common::config::Config;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// Minimal HTTP/1.1 server standing in for the IP-echo service.
pub struct StubServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl StubServer {
    /// Answers every request with `200 OK` and `body`.
    pub async fn serving(body: &'static str) -> anyhow::Result<Self> {
        Self::answering("200 OK", body).await
    }

    pub async fn answering(status: &'static str, body: &'static str) -> anyhow::Result<Self> {
        let listener = bind().await?;
        let addr = listener.local_addr()?;
        let handle = tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let _ = respond(stream, status, body).await;
            }
        });
        Ok(Self { addr, handle })
    }

    /// Accepts connections and never answers.
    pub async fn silent() -> anyhow::Result<Self> {
        let listener = bind().await?;
        let addr = listener.local_addr()?;
        let handle = tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((stream, _)) = listener.accept().await {
                held.push(stream);
            }
        });
        Ok(Self { addr, handle })
    }

    pub fn url(&self) -> String {
        format!("http://{}/", self.addr)
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn bind() -> anyhow::Result<TcpListener> {
    Ok(TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await?)
}

async fn respond(mut stream: TcpStream, status: &str, body: &str) -> anyhow::Result<()> {
    let mut request = Vec::new();
    let mut buf = [0u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut buf).await?;
        if n == 0 {
            return Ok(());
        }
        request.extend_from_slice(&buf[..n]);
    }

    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    stream.write_all(response.as_bytes()).await?;
    stream.shutdown().await?;
    Ok(())
}

/// A config that never leaves the machine: loopback probe, stub endpoint.
pub fn loopback_config(endpoint: String, http_timeout: Duration) -> Config {
    Config {
        endpoint,
        http_timeout,
        probe_addr: (Ipv4Addr::LOCALHOST, 80).into(),
        wait_for_enter: false,
        ..Config::default()
    }
}

/// An address nothing listens on.
pub async fn closed_port_url() -> anyhow::Result<String> {
    let listener = bind().await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{addr}/"))
}
