//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Build the service directory from config
//! - Register every service onto an Axum Router
//! - Serve the route index at `GET /`
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind server to listener and shut down gracefully

use std::sync::Arc;
use std::time::Duration;

use axum::{body::Body, http::Request, routing::get, Json, Router};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::{ConfigError, DirectoryConfig};
use crate::directory::DirectoryError;
use crate::endpoint::Verb;
use crate::http::request::{request_id_layers, X_REQUEST_ID};
use crate::lifecycle::shutdown_signal;
use crate::routing::RouteTable;

/// Errors raised while building or running the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("registration failed: {0}")]
    Registration(#[from] DirectoryError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// HTTP server for a directory of services.
pub struct HttpServer {
    router: Router,
    config: DirectoryConfig,
    routes: RouteTable,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// Fails if the config is invalid or any endpoint uses an unsupported verb.
    pub fn new(config: DirectoryConfig) -> Result<Self, ServerError> {
        let directory = config.build_directory()?;

        // Dry run against the table first so a bad verb never reaches axum.
        let mut routes = RouteTable::new();
        directory.register(&mut routes)?;

        let mut router = Router::new();
        directory.register(&mut router)?;

        tracing::info!(
            services = directory.len(),
            endpoints = directory.endpoint_count(),
            "Directory registered"
        );

        let router = Self::build_router(&config, router, &routes);
        Ok(Self {
            router,
            config,
            routes,
        })
    }

    /// Add the route index and middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &DirectoryConfig, router: Router, routes: &RouteTable) -> Router {
        let mut router = router;

        if config.observability.index_enabled {
            if routes.contains(Verb::Get, "/") {
                tracing::warn!("GET / is registered by a service, route index disabled");
            } else {
                let listing = Arc::new(routes.routes());
                router = router.route(
                    "/",
                    get(move || {
                        let listing = Arc::clone(&listing);
                        async move { Json(listing.as_ref().clone()) }
                    }),
                );
            }
        }

        let (set_request_id, propagate_request_id) = request_id_layers();
        router
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(propagate_request_id)
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                let request_id = request
                    .headers()
                    .get(X_REQUEST_ID)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("unknown");
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id,
                )
            }))
            .layer(set_request_id)
    }

    /// Run the server, accepting connections on the given listener until
    /// Ctrl+C or the shutdown broadcast fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            routes = self.routes.len(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Routes registered by the directory.
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &DirectoryConfig {
        &self.config
    }
}
