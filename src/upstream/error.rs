//! Gateway-local error taxonomy.
//!
//! Three classes of failure originate in the gateway itself; everything else
//! is the upstream's response relayed verbatim:
//! - client errors (bad credentials shape) → 400, upstream never contacted
//! - connectivity errors (unreachable, timed out) → 503 with the reason
//! - internal errors (request could not be built) → 500

use axum::body::Body;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors raised by the gateway before or during an upstream call.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("missing Authorization header")]
    MissingAuthorization,

    #[error("Authorization header must start with \"Bearer \"")]
    MalformedAuthorization,

    #[error("token contains characters not allowed in a header")]
    InvalidToken,

    #[error("whitelist edit must carry exactly one of \"permission\" or \"perm\"")]
    AmbiguousWhitelistEdit,

    #[error("upstream path is not a valid URI: {0}")]
    InvalidUpstreamPath(String),

    #[error("upstream unreachable: {0}")]
    UpstreamUnreachable(String),

    #[error("upstream did not respond within {0}s")]
    UpstreamTimeout(u64),

    #[error("failed to serialize upstream payload: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to build upstream request: {0}")]
    RequestBuild(#[from] axum::http::Error),
}

impl GatewayError {
    /// HTTP status this error maps to on the inbound side.
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::MissingAuthorization
            | GatewayError::MalformedAuthorization
            | GatewayError::InvalidToken
            | GatewayError::AmbiguousWhitelistEdit
            | GatewayError::InvalidUpstreamPath(_) => StatusCode::BAD_REQUEST,
            GatewayError::UpstreamUnreachable(_) | GatewayError::UpstreamTimeout(_) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            GatewayError::Serialize(_) | GatewayError::RequestBuild(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response<Body> {
        // Same error body shape the upstream API uses.
        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_errors_are_client_errors() {
        assert_eq!(GatewayError::MissingAuthorization.status(), StatusCode::BAD_REQUEST);
        assert_eq!(GatewayError::MalformedAuthorization.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_connectivity_errors_are_service_unavailable() {
        let err = GatewayError::UpstreamUnreachable("connection refused".into());
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(GatewayError::UpstreamTimeout(15).status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_message_carries_network_reason() {
        let err = GatewayError::UpstreamUnreachable("connection refused".into());
        assert!(err.to_string().contains("connection refused"));
    }
}
