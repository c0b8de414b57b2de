use std::time::{Duration, Instant};

use cgnat_core::error::NetworkError;
use cgnat_core::resolver::ExternalIpSource;
use cgnat_core::resolver::external::HttpEcho;

use crate::support::{StubServer, closed_port_url};

const TIMEOUT: Duration = Duration::from_millis(300);

#[tokio::test]
async fn body_is_returned_without_trailing_newline() {
    let server = StubServer::serving("100.70.1.1\n").await.unwrap();
    let echo = HttpEcho::new(server.url(), TIMEOUT);

    assert_eq!(echo.get_external_ip().await.unwrap(), "100.70.1.1");
}

#[tokio::test]
async fn surrounding_whitespace_is_trimmed() {
    let server = StubServer::serving("  \t203.0.113.5 \r\n").await.unwrap();
    let echo = HttpEcho::new(server.url(), TIMEOUT);

    assert_eq!(echo.get_external_ip().await.unwrap(), "203.0.113.5");
}

#[tokio::test]
async fn body_is_not_validated() {
    let server = StubServer::serving("definitely not an address").await.unwrap();
    let echo = HttpEcho::new(server.url(), TIMEOUT);

    assert_eq!(echo.get_external_ip().await.unwrap(), "definitely not an address");
}

#[tokio::test]
async fn error_status_still_returns_body() {
    let server = StubServer::answering("503 Service Unavailable", "try again later\n")
        .await
        .unwrap();
    let echo = HttpEcho::new(server.url(), TIMEOUT);

    assert_eq!(echo.get_external_ip().await.unwrap(), "try again later");
}

#[tokio::test]
async fn silent_server_times_out() {
    let server = StubServer::silent().await.unwrap();
    let echo = HttpEcho::new(server.url(), TIMEOUT);

    let started = Instant::now();
    let err = echo.get_external_ip().await.unwrap_err();

    assert!(matches!(err, NetworkError::Timeout { .. }), "got {err:?}");
    assert!(started.elapsed() < Duration::from_secs(3));
    assert!(err.to_string().contains(&server.url()));
}

#[tokio::test]
async fn refused_connection_is_a_request_error() {
    let url = closed_port_url().await.unwrap();
    let echo = HttpEcho::new(url.clone(), TIMEOUT);

    let err = echo.get_external_ip().await.unwrap_err();
    match err {
        NetworkError::Request { endpoint, .. } => assert_eq!(endpoint, url),
        other => panic!("expected a request error, got {other:?}"),
    }
}
