//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Library (service registration):
//!     → debug events per registered endpoint
//! Server (http, lifecycle):
//!     → info/warn events with structured fields
//!     → tower-http TraceLayer spans per request, tagged with x-request-id
//!
//! Consumers:
//!     → logging.rs subscriber (stdout, pretty or JSON)
//! ```
//!
//! # Design Decisions
//! - The library only emits events; installing a subscriber is the binary's job
//! - Registration errors are returned, never logged, by the library

pub mod logging;
