//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! DirectoryConfig
//!     → server.rs (build directory, register onto axum::Router)
//!     → request.rs (request ID generation & propagation)
//!     → axum dispatches to the registered Handle
//!     → Send to client
//! ```

pub mod request;
pub mod server;

pub use request::X_REQUEST_ID;
pub use server::{HttpServer, ServerError};
