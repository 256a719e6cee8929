//! End-to-end tests: config → directory → axum router.

use axum::http::{Method, StatusCode};
use yellowpages::config::loader::parse_config;
use yellowpages::config::{ConfigError, ValidationError};
use yellowpages::http::ServerError;
use yellowpages::{DirectoryError, HttpServer, RegisterError, Verb};

mod common;

#[tokio::test]
async fn test_services_are_routed() {
    let server = HttpServer::new(parse_config(common::DIRECTORY).unwrap()).unwrap();
    let router = server.router();

    assert_eq!(
        common::send(router.clone(), Method::GET, "/users").await,
        (StatusCode::OK, r#"[{"id":1}]"#.to_string())
    );
    assert_eq!(
        common::send(router.clone(), Method::POST, "/users").await,
        (StatusCode::CREATED, "created".to_string())
    );
    assert_eq!(
        common::send(router.clone(), Method::DELETE, "/users/7").await.0,
        StatusCode::NO_CONTENT
    );
    assert_eq!(
        common::send(router.clone(), Method::PATCH, "/users").await.0,
        StatusCode::METHOD_NOT_ALLOWED
    );
    assert_eq!(
        common::send(router, Method::GET, "/nowhere").await.0,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_index_lists_routes() {
    let server = HttpServer::new(parse_config(common::DIRECTORY).unwrap()).unwrap();
    assert_eq!(server.routes().len(), 4);
    assert!(server.routes().contains(Verb::Delete, "/users/{id}"));

    let (status, body) = common::send(server.router(), Method::GET, "/").await;
    assert_eq!(status, StatusCode::OK);

    let listing: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        listing,
        serde_json::json!([
            { "path": "/health", "method": "GET" },
            { "path": "/users", "method": "GET" },
            { "path": "/users", "method": "POST" },
            { "path": "/users/{id}", "method": "DELETE" },
        ])
    );
}

#[tokio::test]
async fn test_index_can_be_disabled() {
    let mut config = parse_config(common::DIRECTORY).unwrap();
    config.observability.index_enabled = false;
    let server = HttpServer::new(config).unwrap();

    let (status, _) = common::send(server.router(), Method::GET, "/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_service_owned_root_wins_over_index() {
    let config = parse_config(
        r#"
        [[services]]
        name = "home"

        [[services.endpoints]]
        method = "GET"
        path = "/"
        body = "welcome"
        "#,
    )
    .unwrap();
    let server = HttpServer::new(config).unwrap();

    assert_eq!(
        common::send(server.router(), Method::GET, "/").await,
        (StatusCode::OK, "welcome".to_string())
    );
}

#[test]
fn test_unsupported_verb_fails_server_construction() {
    let config = parse_config(
        r#"
        [[services]]
        name = "dav"

        [[services.endpoints]]
        method = "PROPFIND"
        path = "/bad"
        "#,
    )
    .unwrap();

    let err = match HttpServer::new(config) {
        Ok(_) => panic!("PROPFIND should not register"),
        Err(err) => err,
    };
    assert!(err.to_string().contains("/bad"));

    match err {
        ServerError::Registration(DirectoryError::Service { service, source }) => {
            assert_eq!(service, "dav");
            assert!(matches!(source, RegisterError::UnsupportedVerb { ref path, .. } if path == "/bad"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_paths_axum_refuses_fail_validation() {
    let cases = [
        ("GET", "/users/{id}", "DELETE", "/users/{name}"),
        ("GET", "/files/*rest", "GET", "/ok"),
        ("GET", "/users/{id", "GET", "/ok"),
    ];

    for (first_method, first_path, second_method, second_path) in cases {
        let config = format!(
            r#"
            [[services]]
            name = "paths"

            [[services.endpoints]]
            method = "{first_method}"
            path = "{first_path}"

            [[services.endpoints]]
            method = "{second_method}"
            path = "{second_path}"
            "#
        );

        match parse_config(&config) {
            Err(ConfigError::Validation(errors)) => assert!(
                errors
                    .iter()
                    .any(|e| matches!(e, ValidationError::InvalidPath { .. })),
                "{first_path} / {second_path}: {errors:?}"
            ),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("{first_path} / {second_path} should not validate"),
        }
    }
}

#[test]
fn test_invalid_path_is_an_error_not_a_panic() {
    let mut config = parse_config(common::DIRECTORY).unwrap();
    config.services[0].endpoints[2].path = "/users/{name}/*tail".into();

    match HttpServer::new(config) {
        Err(ServerError::Config(ConfigError::Validation(errors))) => {
            assert!(errors[0].to_string().contains("/users/{name}/*tail"));
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("server should refuse the path"),
    }
}

#[tokio::test]
async fn test_live_server_sets_request_id() {
    let (addr, shutdown) = common::start_server(common::DIRECTORY).await;

    let client = reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap();

    let res = client
        .get(format!("http://{}/health", addr))
        .send()
        .await
        .expect("server unreachable");
    assert_eq!(res.status(), 200);
    assert!(res.headers().contains_key("x-request-id"));
    assert_eq!(res.text().await.unwrap(), "ok");

    let res = client
        .get(format!("http://{}/users", addr))
        .header("x-request-id", "abc-123")
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers()["x-request-id"], "abc-123");
    assert_eq!(res.headers()["content-type"], "application/json");

    shutdown.trigger();
}

#[tokio::test]
async fn test_demo_directory_builds() {
    let config = parse_config(include_str!("../demos/services.toml")).unwrap();
    let server = HttpServer::new(config).unwrap();

    assert!(server.routes().contains(Verb::Head, "/health"));
    assert_eq!(
        common::send(server.router(), Method::HEAD, "/health").await.0,
        StatusCode::OK
    );
}
