//! Configuration schema definitions.
//!
//! This module defines the configuration structure for a directory of
//! services. All types derive Serde traits for deserialization from config
//! files.

use axum::http::header::{HeaderValue, InvalidHeaderValue, CONTENT_TYPE};
use axum::http::method::InvalidMethod;
use axum::http::status::InvalidStatusCode;
use axum::http::{Method, StatusCode};
use serde::{Deserialize, Serialize};

use crate::config::loader::ConfigError;
use crate::config::validation::{validate_config, ValidationError};
use crate::directory::Directory;
use crate::endpoint::Endpoint;
use crate::handle::Handle;
use crate::service::Service;

/// Root configuration for a directory server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct DirectoryConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Named services and their endpoints.
    pub services: Vec<ServiceConfig>,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log filter used when `RUST_LOG` is unset (e.g. "info", "yellowpages=debug").
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Serve the route listing as JSON at `GET /`.
    pub index_enabled: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            index_enabled: true,
        }
    }
}

/// A named group of endpoints.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name, unique within the directory.
    pub name: String,

    #[serde(default)]
    pub endpoints: Vec<EndpointConfig>,
}

/// An endpoint answering with a canned response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EndpointConfig {
    /// HTTP method token, case-insensitive (e.g. "GET").
    pub method: String,

    /// Route path in axum syntax (e.g. "/users/{id}").
    pub path: String,

    /// Response status code.
    #[serde(default = "default_status")]
    pub status: u16,

    /// Response body.
    #[serde(default)]
    pub body: String,

    /// Response content type.
    #[serde(default = "default_content_type")]
    pub content_type: String,
}

fn default_status() -> u16 {
    200
}

fn default_content_type() -> String {
    "text/plain; charset=utf-8".to_string()
}

impl EndpointConfig {
    /// The configured method, upper-cased.
    pub fn method(&self) -> Result<Method, InvalidMethod> {
        Method::from_bytes(self.method.to_ascii_uppercase().as_bytes())
    }

    pub fn endpoint(&self) -> Result<Endpoint, InvalidMethod> {
        Ok(Endpoint::new(self.method()?, self.path.clone()))
    }

    pub fn status(&self) -> Result<StatusCode, InvalidStatusCode> {
        StatusCode::from_u16(self.status)
    }

    pub fn content_type(&self) -> Result<HeaderValue, InvalidHeaderValue> {
        HeaderValue::from_str(&self.content_type)
    }

    /// A handler that always answers with this endpoint's canned response.
    fn handle(&self, service: &str) -> Result<Handle, ValidationError> {
        let status = self.status().map_err(|_| ValidationError::InvalidStatus {
            service: service.to_string(),
            path: self.path.clone(),
            status: self.status,
        })?;
        let content_type = self
            .content_type()
            .map_err(|_| ValidationError::InvalidContentType {
                service: service.to_string(),
                path: self.path.clone(),
            })?;
        let body = self.body.clone();

        Ok(Handle::new(move || {
            let content_type = content_type.clone();
            let body = body.clone();
            async move { (status, [(CONTENT_TYPE, content_type)], body) }
        }))
    }
}

impl ServiceConfig {
    fn build_service(&self) -> Result<Service<Handle>, ValidationError> {
        let mut service = Service::new();
        for endpoint in &self.endpoints {
            let key = endpoint
                .endpoint()
                .map_err(|_| ValidationError::InvalidMethod {
                    service: self.name.clone(),
                    method: endpoint.method.clone(),
                })?;
            service.insert(key, endpoint.handle(&self.name)?);
        }
        Ok(service)
    }
}

impl DirectoryConfig {
    /// Validate the config and build a directory of canned-response services.
    pub fn build_directory(&self) -> Result<Directory<Handle>, ConfigError> {
        validate_config(self).map_err(ConfigError::Validation)?;

        let mut directory = Directory::new();
        for service in &self.services {
            let built = service
                .build_service()
                .map_err(|e| ConfigError::Validation(vec![e]))?;
            directory.insert(service.name.clone(), built);
        }
        Ok(directory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::Verb;

    fn endpoint(method: &str, path: &str) -> EndpointConfig {
        EndpointConfig {
            method: method.to_string(),
            path: path.to_string(),
            status: default_status(),
            body: String::new(),
            content_type: default_content_type(),
        }
    }

    #[test]
    fn test_method_is_case_insensitive() {
        assert_eq!(endpoint("get", "/").method().unwrap(), Method::GET);
        assert_eq!(endpoint("Patch", "/").method().unwrap(), Method::PATCH);
        assert!(endpoint("GE T", "/").method().is_err());
    }

    #[test]
    fn test_build_directory() {
        let config = DirectoryConfig {
            services: vec![
                ServiceConfig {
                    name: "users".into(),
                    endpoints: vec![endpoint("GET", "/users"), endpoint("DELETE", "/users/{id}")],
                },
                ServiceConfig {
                    name: "health".into(),
                    endpoints: vec![endpoint("HEAD", "/health")],
                },
            ],
            ..Default::default()
        };

        let directory = config.build_directory().unwrap();
        assert_eq!(directory.len(), 2);
        assert_eq!(directory.endpoint_count(), 3);

        let users = directory.get("users").unwrap();
        assert!(users.contains(&Endpoint::new(Verb::Delete, "/users/{id}")));
    }

    #[test]
    fn test_unsupported_verb_survives_build() {
        let config = DirectoryConfig {
            services: vec![ServiceConfig {
                name: "dav".into(),
                endpoints: vec![endpoint("PROPFIND", "/files")],
            }],
            ..Default::default()
        };

        let directory = config.build_directory().unwrap();
        let dav = directory.get("dav").unwrap();
        let key = dav.endpoints().next().unwrap();
        assert!(key.verb().is_err());
    }

    #[test]
    fn test_bad_response_settings_are_errors() {
        let mut bad_status = endpoint("GET", "/users");
        bad_status.status = 1000;
        assert!(matches!(
            bad_status.handle("users"),
            Err(ValidationError::InvalidStatus { status: 1000, .. })
        ));

        let mut bad_content_type = endpoint("GET", "/users");
        bad_content_type.content_type = "text/plain\n".to_string();
        assert!(matches!(
            bad_content_type.handle("users"),
            Err(ValidationError::InvalidContentType { ref service, .. }) if service == "users"
        ));

        assert!(endpoint("GET", "/users").handle("users").is_ok());
    }

    #[test]
    fn test_invalid_config_does_not_build() {
        let config = DirectoryConfig {
            services: vec![ServiceConfig {
                name: "broken".into(),
                endpoints: vec![endpoint("GET", "no-slash")],
            }],
            ..Default::default()
        };

        assert!(matches!(
            config.build_directory(),
            Err(ConfigError::Validation(_))
        ));
    }
}
