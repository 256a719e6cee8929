//! Services: sets of endpoints registered together.
//!
//! # Data Flow
//! ```text
//! Service { Endpoint → handler }
//!     → register(&mut router)
//!     → one verb-specific Registrar call per entry
//!     → Ok(()) or UnsupportedVerb for the first bad entry
//! ```
//!
//! # Design Decisions
//! - Registration borrows the service; it can be inspected or registered again
//! - Iteration order is unspecified (HashMap)
//! - Fail fast: the first unsupported method stops registration, no rollback

use std::collections::hash_map::{self, HashMap};

use axum::http::Method;
use thiserror::Error;

use crate::endpoint::{Endpoint, Verb};
use crate::routing::Registrar;

/// Error returned when a service cannot be registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterError {
    /// The endpoint's method is not one of the supported verbs.
    #[error("unknown endpoint action {method} for path [{path}]")]
    UnsupportedVerb { method: Method, path: String },
}

impl RegisterError {
    /// Path of the endpoint that failed to register.
    pub fn path(&self) -> &str {
        match self {
            RegisterError::UnsupportedVerb { path, .. } => path,
        }
    }
}

/// A Service maps Endpoints to handlers.
#[derive(Debug, Clone)]
pub struct Service<H> {
    endpoints: HashMap<Endpoint, H>,
}

impl<H> Default for Service<H> {
    fn default() -> Self {
        Self {
            endpoints: HashMap::new(),
        }
    }
}

impl<H> Service<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert. A later handler for the same endpoint wins.
    pub fn with(mut self, endpoint: Endpoint, handler: H) -> Self {
        self.endpoints.insert(endpoint, handler);
        self
    }

    /// Insert a handler, returning the one it replaced.
    pub fn insert(&mut self, endpoint: Endpoint, handler: H) -> Option<H> {
        self.endpoints.insert(endpoint, handler)
    }

    pub fn get(&self, endpoint: &Endpoint) -> Option<&H> {
        self.endpoints.get(endpoint)
    }

    pub fn contains(&self, endpoint: &Endpoint) -> bool {
        self.endpoints.contains_key(endpoint)
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, Endpoint, H> {
        self.endpoints.iter()
    }

    pub fn endpoints(&self) -> hash_map::Keys<'_, Endpoint, H> {
        self.endpoints.keys()
    }

    /// Register each Endpoint in the Service with the router.
    ///
    /// Each handler is cloned into the router. Registration stops at the
    /// first endpoint whose method is not a supported [`Verb`]; entries
    /// registered before it stay registered.
    pub fn register<R>(&self, router: &mut R) -> Result<(), RegisterError>
    where
        R: Registrar<H> + ?Sized,
        H: Clone,
    {
        for (endpoint, handler) in &self.endpoints {
            let path = endpoint.path();
            let verb = endpoint
                .verb()
                .map_err(|_| RegisterError::UnsupportedVerb {
                    method: endpoint.method().clone(),
                    path: path.to_string(),
                })?;

            let handler = handler.clone();
            match verb {
                Verb::Get => router.get(path, handler),
                Verb::Head => router.head(path, handler),
                Verb::Post => router.post(path, handler),
                Verb::Put => router.put(path, handler),
                Verb::Delete => router.delete(path, handler),
                Verb::Options => router.options(path, handler),
                Verb::Patch => router.patch(path, handler),
            }

            tracing::debug!(method = %verb, path = %path, "Registered endpoint");
        }
        Ok(())
    }
}

impl<H> FromIterator<(Endpoint, H)> for Service<H> {
    fn from_iter<I: IntoIterator<Item = (Endpoint, H)>>(iter: I) -> Self {
        Self {
            endpoints: iter.into_iter().collect(),
        }
    }
}

impl<H> Extend<(Endpoint, H)> for Service<H> {
    fn extend<I: IntoIterator<Item = (Endpoint, H)>>(&mut self, iter: I) {
        self.endpoints.extend(iter);
    }
}

impl<'a, H> IntoIterator for &'a Service<H> {
    type Item = (&'a Endpoint, &'a H);
    type IntoIter = hash_map::Iter<'a, Endpoint, H>;

    fn into_iter(self) -> Self::IntoIter {
        self.endpoints.iter()
    }
}
