//! Route table for endpoint introspection.
//!
//! A `RouteTable` is a `Registrar` that records what would be registered
//! instead of routing anything. The server uses it for its index page and
//! the CLI uses it to list routes.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::endpoint::Verb;
use crate::routing::Registrar;

/// Information about a registered route.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct RouteInfo {
    /// The path pattern (e.g., "/users/{id}")
    pub path: String,
    /// The HTTP method (e.g., "GET")
    pub method: Verb,
}

/// Sorted, de-duplicated listing of (verb, path) registrations.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: BTreeSet<RouteInfo>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, method: Verb, path: &str) {
        self.routes.insert(RouteInfo {
            path: path.to_string(),
            method,
        });
    }

    pub fn contains(&self, method: Verb, path: &str) -> bool {
        self.routes.contains(&RouteInfo {
            path: path.to_string(),
            method,
        })
    }

    /// All routes, ordered by path then verb.
    pub fn routes(&self) -> Vec<RouteInfo> {
        self.routes.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<H> Registrar<H> for RouteTable {
    fn get(&mut self, path: &str, _handler: H) {
        self.add(Verb::Get, path);
    }

    fn head(&mut self, path: &str, _handler: H) {
        self.add(Verb::Head, path);
    }

    fn post(&mut self, path: &str, _handler: H) {
        self.add(Verb::Post, path);
    }

    fn put(&mut self, path: &str, _handler: H) {
        self.add(Verb::Put, path);
    }

    fn delete(&mut self, path: &str, _handler: H) {
        self.add(Verb::Delete, path);
    }

    fn options(&mut self, path: &str, _handler: H) {
        self.add(Verb::Options, path);
    }

    fn patch(&mut self, path: &str, _handler: H) {
        self.add(Verb::Patch, path);
    }
}
