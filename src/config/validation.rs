//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, status codes, bind address)
//! - Detect duplicate services and duplicate endpoints
//! - Reject paths the axum router would refuse (it panics on them)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: DirectoryConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::DirectoryConfig;

/// A semantic problem in a config file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("service #{index} has an empty name")]
    EmptyServiceName { index: usize },

    #[error("service `{0}` is defined more than once")]
    DuplicateService(String),

    #[error("service `{service}` has an endpoint with an empty path")]
    EmptyPath { service: String },

    #[error("service `{service}`: path `{path}` must start with '/'")]
    RelativePath { service: String, path: String },

    #[error("service `{service}`: path `{path}` uses `:param` captures, use `{{param}}`")]
    ColonCapture { service: String, path: String },

    #[error("service `{service}`: `{method}` is not a valid HTTP method")]
    InvalidMethod { service: String, method: String },

    #[error("service `{service}`: invalid status code {status} for path `{path}`")]
    InvalidStatus {
        service: String,
        path: String,
        status: u16,
    },

    #[error("service `{service}`: invalid content type for path `{path}`")]
    InvalidContentType { service: String, path: String },

    #[error("service `{service}`: invalid path `{path}`: {reason}")]
    InvalidPath {
        service: String,
        path: String,
        reason: String,
    },

    #[error("endpoint {method} {path} is defined more than once")]
    DuplicateEndpoint { method: String, path: String },

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,

    #[error("invalid bind address `{0}`")]
    InvalidBindAddress(String),
}

/// Check a parsed config, collecting every problem found.
pub fn validate_config(config: &DirectoryConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    let mut names = HashSet::new();
    let mut endpoints = HashSet::new();
    let mut paths = HashSet::new();
    // Same matcher axum routes with; a path it refuses would panic at startup.
    let mut matcher = matchit::Router::new();

    for (index, service) in config.services.iter().enumerate() {
        if service.name.trim().is_empty() {
            errors.push(ValidationError::EmptyServiceName { index });
        } else if !names.insert(service.name.as_str()) {
            errors.push(ValidationError::DuplicateService(service.name.clone()));
        }

        for endpoint in &service.endpoints {
            if endpoint.path.is_empty() {
                errors.push(ValidationError::EmptyPath {
                    service: service.name.clone(),
                });
            } else if !endpoint.path.starts_with('/') {
                errors.push(ValidationError::RelativePath {
                    service: service.name.clone(),
                    path: endpoint.path.clone(),
                });
            } else if endpoint.path.contains("/:") {
                errors.push(ValidationError::ColonCapture {
                    service: service.name.clone(),
                    path: endpoint.path.clone(),
                });
            } else if endpoint.path.contains("/*") {
                errors.push(ValidationError::InvalidPath {
                    service: service.name.clone(),
                    path: endpoint.path.clone(),
                    reason: "path segments must not start with `*`, use `{*rest}`".to_string(),
                });
            } else if paths.insert(endpoint.path.as_str()) {
                if let Err(e) = matcher.insert(endpoint.path.as_str(), ()) {
                    errors.push(ValidationError::InvalidPath {
                        service: service.name.clone(),
                        path: endpoint.path.clone(),
                        reason: e.to_string(),
                    });
                }
            }

            if endpoint.status().is_err() {
                errors.push(ValidationError::InvalidStatus {
                    service: service.name.clone(),
                    path: endpoint.path.clone(),
                    status: endpoint.status,
                });
            }

            if endpoint.content_type().is_err() {
                errors.push(ValidationError::InvalidContentType {
                    service: service.name.clone(),
                    path: endpoint.path.clone(),
                });
            }

            match endpoint.method() {
                Ok(method) => {
                    if !endpoints.insert((method.clone(), endpoint.path.as_str())) {
                        errors.push(ValidationError::DuplicateEndpoint {
                            method: method.to_string(),
                            path: endpoint.path.clone(),
                        });
                    }
                }
                Err(_) => errors.push(ValidationError::InvalidMethod {
                    service: service.name.clone(),
                    method: endpoint.method.clone(),
                }),
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
