//! Type-erased request handlers.
//!
//! Every axum handler function has its own type, so a `Service` that mixes
//! handlers needs a single handler type. `Handle` boxes any axum `Handler`
//! behind a shared, cloneable function pointer.

use std::fmt;
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::handler::Handler;
use axum::response::Response;
use axum::routing::{self, MethodRouter};
use futures_util::future::{BoxFuture, FutureExt};

use crate::endpoint::Verb;

type BoxedHandler<S> = dyn Fn(Request, S) -> BoxFuture<'static, Response> + Send + Sync;

/// A cloneable handler that generates responses for requests to an Endpoint.
pub struct Handle<S = ()> {
    inner: Arc<BoxedHandler<S>>,
}

impl<S> Handle<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// Wrap an axum handler.
    pub fn new<H, T>(handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        Self {
            inner: Arc::new(move |req: Request, state: S| handler.clone().call(req, state).boxed()),
        }
    }

    /// Run the handler against a request.
    pub fn call(&self, req: Request, state: S) -> BoxFuture<'static, Response> {
        (self.inner)(req, state)
    }

    /// Build a method router that serves this handler for one verb.
    pub fn into_method_router(self, verb: Verb) -> MethodRouter<S> {
        routing::on(
            verb.method_filter(),
            move |State(state): State<S>, req: Request| self.call(req, state),
        )
    }
}

impl<S> Clone for Handle<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S> fmt::Debug for Handle<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle").finish_non_exhaustive()
    }
}
