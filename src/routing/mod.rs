//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Service::register(&mut registrar)
//!     → Registrar::{get, head, post, put, delete, options, patch}
//!     → engine.rs: adds the route to an axum::Router
//!     → table.rs: records (verb, path) for introspection
//! ```
//!
//! # Design Decisions
//! - The router is an injected capability; any Registrar is substitutable
//! - Path matching and parameter extraction stay inside axum
//! - Duplicate registrations are the registrar's business, not the service's

pub mod engine;
pub mod table;

pub use table::{RouteInfo, RouteTable};

/// A router that accepts one handler per (verb, path) registration.
///
/// Mirrors the per-verb registration surface of common HTTP routers.
pub trait Registrar<H> {
    fn get(&mut self, path: &str, handler: H);
    fn head(&mut self, path: &str, handler: H);
    fn post(&mut self, path: &str, handler: H);
    fn put(&mut self, path: &str, handler: H);
    fn delete(&mut self, path: &str, handler: H);
    fn options(&mut self, path: &str, handler: H);
    fn patch(&mut self, path: &str, handler: H);
}
