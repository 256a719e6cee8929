//! Yellowpages: register groups of HTTP endpoints onto a router in one call.
//!
//! An [`Endpoint`] colocates an HTTP method and a path, a [`Service`] maps
//! endpoints to handlers, and [`Service::register`] hands every entry to a
//! [`Registrar`] such as an `axum::Router`.
//!
//! ```no_run
//! use axum::Router;
//! use yellowpages::{Endpoint, Handle, Service};
//!
//! let users = Service::new()
//!     .with(Endpoint::get("/users"), Handle::new(|| async { "[]" }))
//!     .with(Endpoint::post("/users"), Handle::new(|| async { "created" }));
//!
//! let mut router: Router = Router::new();
//! users.register(&mut router).expect("supported verbs only");
//! ```

// Core
pub mod directory;
pub mod endpoint;
pub mod handle;
pub mod routing;
pub mod service;

// Server
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use axum::http::Method;
pub use directory::{Directory, DirectoryError};
pub use endpoint::{Endpoint, UnsupportedMethod, Verb};
pub use handle::Handle;
pub use routing::{Registrar, RouteTable};
pub use service::{RegisterError, Service};

pub use config::DirectoryConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
