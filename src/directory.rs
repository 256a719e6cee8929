//! Directory of named services.
//!
//! # Design Decisions
//! - Services are kept in name order so registration is deterministic
//!   across services (order within a service is still unspecified)
//! - Fail fast: the first failing service stops registration

use std::collections::btree_map::{self, BTreeMap};

use thiserror::Error;

use crate::routing::Registrar;
use crate::service::{RegisterError, Service};

/// Error returned when a directory cannot be registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("service `{service}`: {source}")]
    Service {
        service: String,
        #[source]
        source: RegisterError,
    },
}

/// An ordered set of named services.
#[derive(Debug, Clone)]
pub struct Directory<H> {
    services: BTreeMap<String, Service<H>>,
}

impl<H> Default for Directory<H> {
    fn default() -> Self {
        Self {
            services: BTreeMap::new(),
        }
    }
}

impl<H> Directory<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named service, returning any service it replaced.
    pub fn insert(&mut self, name: impl Into<String>, service: Service<H>) -> Option<Service<H>> {
        self.services.insert(name.into(), service)
    }

    pub fn get(&self, name: &str) -> Option<&Service<H>> {
        self.services.get(name)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Service<H>> {
        self.services.iter()
    }

    /// Number of services.
    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Number of endpoints across all services.
    pub fn endpoint_count(&self) -> usize {
        self.services.values().map(Service::len).sum()
    }

    /// Register every service with the router, in name order.
    pub fn register<R>(&self, router: &mut R) -> Result<(), DirectoryError>
    where
        R: Registrar<H> + ?Sized,
        H: Clone,
    {
        for (name, service) in &self.services {
            service
                .register(router)
                .map_err(|source| DirectoryError::Service {
                    service: name.clone(),
                    source,
                })?;
        }
        Ok(())
    }
}
