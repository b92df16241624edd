//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the upstream base URL is a usable http(s) URL
//! - Validate value ranges (timeouts > 0, bind address parseable)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use crate::config::schema::GatewayConfig;
use std::net::SocketAddr;
use url::Url;

/// A single semantic configuration problem.
#[derive(Debug)]
pub struct ValidationError {
    /// Dotted path of the offending field (e.g., "upstream.base_url").
    pub field: String,
    /// Human-readable description of the problem.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a parsed configuration, collecting every error found.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError {
            field: "listener.bind_address".into(),
            message: format!("not a valid socket address: {}", config.listener.bind_address),
        });
    }

    match Url::parse(&config.upstream.base_url) {
        Ok(url) if url.scheme() == "http" => {}
        Ok(url) => errors.push(ValidationError {
            // The outbound connector speaks plain HTTP only.
            field: "upstream.base_url".into(),
            message: format!("unsupported scheme (expected http): {}", url.scheme()),
        }),
        Err(e) => errors.push(ValidationError {
            field: "upstream.base_url".into(),
            message: format!("not a valid URL: {}", e),
        }),
    }

    if config.upstream.timeout_secs == 0 {
        errors.push(ValidationError {
            field: "upstream.timeout_secs".into(),
            message: "must be greater than zero".into(),
        });
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError {
            field: "timeouts.request_secs".into(),
            message: "must be greater than zero".into(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
