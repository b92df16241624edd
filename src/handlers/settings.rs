//! Endpoint settings routes.
//!
//! Settings records are owned entirely by the upstream; the gateway relays
//! bodies byte-for-byte without inspecting their fields.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, HeaderValue, Method};
use axum::response::Response;

use crate::http::auth::bearer_token;
use crate::http::server::AppState;
use crate::upstream::GatewayError;

fn content_type(headers: &HeaderMap) -> Option<HeaderValue> {
    headers.get(header::CONTENT_TYPE).cloned()
}

/// GET /operator/settings/ → GET {base}/operator/settings/
pub async fn list(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, GatewayError> {
    let token = bearer_token(&headers)?;
    state.upstream.get("/operator/settings/", Some(token)).await
}

/// POST /operator/settings/ → POST {base}/operator/settings/ (body verbatim)
pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, GatewayError> {
    let token = bearer_token(&headers)?;
    state
        .upstream
        .forward(Method::POST, "/operator/settings/", token, content_type(&headers), body)
        .await
}

/// PUT /operator/settings/{id} → PUT {base}/operator/settings/{id} (body verbatim)
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, GatewayError> {
    let token = bearer_token(&headers)?;
    let path = format!("/operator/settings/{}", id);
    state
        .upstream
        .forward(Method::PUT, &path, token, content_type(&headers), body)
        .await
}

/// DELETE /operator/settings/{id} → DELETE {base}/operator/settings/{id}
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, GatewayError> {
    let token = bearer_token(&headers)?;
    let path = format!("/operator/settings/{}", id);
    state.upstream.delete(&path, token).await
}
