//! Bearer token extraction for header-authenticated routes.
//!
//! The gateway never interprets tokens; it only checks the literal
//! `"Bearer "` prefix and forwards the remainder verbatim. Routes that take
//! the token as a form field skip this check entirely.

use axum::http::{header, HeaderMap};

use crate::upstream::GatewayError;

/// Required prefix of the `Authorization` header, including the space.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Extract the bearer token from the `Authorization` header.
///
/// Absence or a prefix mismatch is a client error raised before any
/// upstream call is attempted.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, GatewayError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(GatewayError::MissingAuthorization)?
        .to_str()
        .map_err(|_| GatewayError::MalformedAuthorization)?;

    value
        .strip_prefix(BEARER_PREFIX)
        .ok_or(GatewayError::MalformedAuthorization)
}
