//! Endpoints: an HTTP verb colocated with a path.
//!
//! # Design Decisions
//! - `Verb` is the closed set of verbs a service may register
//! - `Endpoint` stores the routing engine's own `Method`, which is an open set
//! - Unsupported methods are accepted at construction and rejected at registration

use std::fmt;

use axum::http::Method;
use axum::routing::MethodFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The HTTP verbs a service can register with a router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verb {
    Get,
    Head,
    Post,
    Put,
    Delete,
    Options,
    Patch,
}

impl Verb {
    /// Every supported verb, in declaration order.
    pub const ALL: [Verb; 7] = [
        Verb::Get,
        Verb::Head,
        Verb::Post,
        Verb::Put,
        Verb::Delete,
        Verb::Options,
        Verb::Patch,
    ];

    /// Upper-case token as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Head => "HEAD",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
            Verb::Options => "OPTIONS",
            Verb::Patch => "PATCH",
        }
    }

    /// The axum method filter that routes this verb.
    pub fn method_filter(&self) -> MethodFilter {
        match self {
            Verb::Get => MethodFilter::GET,
            Verb::Head => MethodFilter::HEAD,
            Verb::Post => MethodFilter::POST,
            Verb::Put => MethodFilter::PUT,
            Verb::Delete => MethodFilter::DELETE,
            Verb::Options => MethodFilter::OPTIONS,
            Verb::Patch => MethodFilter::PATCH,
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Verb> for Method {
    fn from(verb: Verb) -> Self {
        match verb {
            Verb::Get => Method::GET,
            Verb::Head => Method::HEAD,
            Verb::Post => Method::POST,
            Verb::Put => Method::PUT,
            Verb::Delete => Method::DELETE,
            Verb::Options => Method::OPTIONS,
            Verb::Patch => Method::PATCH,
        }
    }
}

/// A method outside the supported verb set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported HTTP method {0}")]
pub struct UnsupportedMethod(pub Method);

impl TryFrom<&Method> for Verb {
    type Error = UnsupportedMethod;

    fn try_from(method: &Method) -> Result<Self, Self::Error> {
        match *method {
            Method::GET => Ok(Verb::Get),
            Method::HEAD => Ok(Verb::Head),
            Method::POST => Ok(Verb::Post),
            Method::PUT => Ok(Verb::Put),
            Method::DELETE => Ok(Verb::Delete),
            Method::OPTIONS => Ok(Verb::Options),
            Method::PATCH => Ok(Verb::Patch),
            _ => Err(UnsupportedMethod(method.clone())),
        }
    }
}

/// An Endpoint colocates an HTTP method and a path.
///
/// The path uses the router's pattern syntax (e.g. `/users/{id}`) and is
/// passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint {
    method: Method,
    path: String,
}

impl Endpoint {
    /// Create an endpoint from any method the router understands.
    pub fn new(method: impl Into<Method>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Verb::Get, path)
    }

    pub fn head(path: impl Into<String>) -> Self {
        Self::new(Verb::Head, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Verb::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Verb::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Verb::Delete, path)
    }

    pub fn options(path: impl Into<String>) -> Self {
        Self::new(Verb::Options, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Verb::Patch, path)
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// The supported verb for this endpoint, if it has one.
    pub fn verb(&self) -> Result<Verb, UnsupportedMethod> {
        Verb::try_from(&self.method)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}
