//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tokio::net::TcpListener;
use tower::ServiceExt;
use yellowpages::config::loader::parse_config;
use yellowpages::{HttpServer, Shutdown};

/// A small directory used across tests.
pub const DIRECTORY: &str = r#"
    [listener]
    bind_address = "127.0.0.1:0"

    [[services]]
    name = "users"

    [[services.endpoints]]
    method = "GET"
    path = "/users"
    body = '[{"id":1}]'
    content_type = "application/json"

    [[services.endpoints]]
    method = "POST"
    path = "/users"
    status = 201
    body = "created"

    [[services.endpoints]]
    method = "DELETE"
    path = "/users/{id}"
    status = 204

    [[services]]
    name = "health"

    [[services.endpoints]]
    method = "GET"
    path = "/health"
    body = "ok"
"#;

/// Send one request through the router and collect the response.
pub async fn send(router: Router, method: Method, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Start a server for `config` on an ephemeral port.
#[allow(dead_code)]
pub async fn start_server(config: &str) -> (SocketAddr, Shutdown) {
    let config = parse_config(config).unwrap();
    let server = HttpServer::new(config).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    (addr, shutdown)
}
