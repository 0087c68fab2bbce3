#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use dbpulse::config::Config;
use dbpulse::router::{PulseState, pulse_router};
use dbpulse::service::prober::ConnectivityProber;
use serde_json::Value;
use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tower::ServiceExt;

pub const TEST_KEY: &str = "anon-test-key";

/// Serve `stub` on an ephemeral local port, emulating the datastore REST layer.
pub async fn spawn_stub(stub: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind stub listener");
    let addr = listener.local_addr().expect("stub has no local addr");
    tokio::spawn(async move {
        axum::serve(listener, stub).await.expect("stub server failed");
    });
    addr
}

/// Answer every connection with `response` written verbatim, then hang up.
/// Lets a test send replies axum would refuse to produce, such as a body
/// shorter than its `Content-Length`.
pub async fn spawn_raw_stub(response: &'static str) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind raw stub listener");
    let addr = listener.local_addr().expect("raw stub has no local addr");
    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });
    addr
}

/// A local address with nothing listening on it.
pub async fn closed_port() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind probe listener");
    let addr = listener.local_addr().expect("listener has no local addr");
    drop(listener);
    addr
}

pub fn config_for(url: Option<&str>, key: Option<&str>) -> Config {
    Config {
        database_url: url.map(str::to_string),
        database_key: key.map(str::to_string),
        probe_timeout_secs: 1,
        ..Config::default()
    }
}

pub fn app_for(cfg: &Config) -> Router {
    pulse_router(PulseState::new(ConnectivityProber::from_config(cfg)))
}

/// App with no datastore configured; enough for the routes that never touch it.
pub fn offline_app() -> Router {
    app_for(&config_for(None, None))
}

pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.expect("request failed");
    let status = resp.status();
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let json = serde_json::from_slice(&body).expect("response body was not JSON");
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("failed to build request"),
    )
    .await
}
