//! Registration onto an axum `Router`.
//!
//! # Responsibilities
//! - Translate each verb-specific registration into an axum route
//! - Merge several verbs on one path into a single method router
//!
//! # Design Decisions
//! - axum panics on a duplicate (verb, path); that is the router's contract
//! - Paths are handed to axum untouched (`/users/{id}` syntax)

use axum::Router;

use crate::endpoint::Verb;
use crate::handle::Handle;
use crate::routing::Registrar;

fn mount<S>(router: &mut Router<S>, verb: Verb, path: &str, handle: Handle<S>)
where
    S: Clone + Send + Sync + 'static,
{
    let current = std::mem::replace(router, Router::new());
    *router = current.route(path, handle.into_method_router(verb));
}

impl<S> Registrar<Handle<S>> for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn get(&mut self, path: &str, handler: Handle<S>) {
        mount(self, Verb::Get, path, handler);
    }

    fn head(&mut self, path: &str, handler: Handle<S>) {
        mount(self, Verb::Head, path, handler);
    }

    fn post(&mut self, path: &str, handler: Handle<S>) {
        mount(self, Verb::Post, path, handler);
    }

    fn put(&mut self, path: &str, handler: Handle<S>) {
        mount(self, Verb::Put, path, handler);
    }

    fn delete(&mut self, path: &str, handler: Handle<S>) {
        mount(self, Verb::Delete, path, handler);
    }

    fn options(&mut self, path: &str, handler: Handle<S>) {
        mount(self, Verb::Options, path, handler);
    }

    fn patch(&mut self, path: &str, handler: Handle<S>) {
        mount(self, Verb::Patch, path, handler);
    }
}
