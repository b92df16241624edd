//! HTTP client for the upstream ticketing API.
//!
//! One client instance serves the whole gateway; the legacy hyper client
//! checks a connection out per call and returns (or drops) it on every exit
//! path, so no handle outlives a request.

use axum::body::{Body, Bytes};
use axum::http::{header, HeaderValue, Method, Request, Uri};
use axum::response::Response;
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use std::time::Duration;

use crate::config::UpstreamConfig;
use crate::upstream::error::GatewayError;

/// Client for the upstream ticketing API.
pub struct UpstreamClient {
    client: Client<HttpConnector, Body>,
    base_url: String,
    timeout: Duration,
}

impl UpstreamClient {
    /// Create a client for the configured upstream.
    pub fn new(config: &UpstreamConfig) -> Self {
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    /// GET with an optional bearer token.
    pub async fn get(&self, path: &str, token: Option<&str>) -> Result<Response, GatewayError> {
        self.send(Method::GET, path, token, None, Body::empty()).await
    }

    /// POST a JSON payload with an optional bearer token.
    pub async fn post_json(
        &self,
        path: &str,
        token: Option<&str>,
        payload: &serde_json::Value,
    ) -> Result<Response, GatewayError> {
        let bytes = serde_json::to_vec(payload)?;
        self.send(
            Method::POST,
            path,
            token,
            Some(HeaderValue::from_static("application/json")),
            Body::from(bytes),
        )
        .await
    }

    /// POST with a bearer token and no body (logout, ticket close).
    pub async fn post_empty(&self, path: &str, token: &str) -> Result<Response, GatewayError> {
        self.send(Method::POST, path, Some(token), None, Body::empty()).await
    }

    /// DELETE with a bearer token.
    pub async fn delete(&self, path: &str, token: &str) -> Result<Response, GatewayError> {
        self.send(Method::DELETE, path, Some(token), None, Body::empty()).await
    }

    /// Forward an inbound body verbatim, preserving its content type.
    pub async fn forward(
        &self,
        method: Method,
        path: &str,
        token: &str,
        content_type: Option<HeaderValue>,
        body: Bytes,
    ) -> Result<Response, GatewayError> {
        self.send(method, path, Some(token), content_type, Body::from(body)).await
    }

    /// Issue one upstream call and relay the response verbatim.
    ///
    /// Path parameters must already be substituted into `path`. The deadline
    /// covers the whole call; expiry and network failures both surface as
    /// connectivity errors without retry.
    async fn send(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        content_type: Option<HeaderValue>,
        body: Body,
    ) -> Result<Response, GatewayError> {
        let target = format!("{}{}", self.base_url, path);
        let uri: Uri = target
            .parse()
            .map_err(|_| GatewayError::InvalidUpstreamPath(target.clone()))?;

        let mut builder = Request::builder().method(method.clone()).uri(uri);
        if let Some(headers) = builder.headers_mut() {
            if let Some(ct) = content_type {
                headers.insert(header::CONTENT_TYPE, ct);
            }
            if let Some(token) = token {
                let value = HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|_| GatewayError::InvalidToken)?;
                headers.insert(header::AUTHORIZATION, value);
            }
        }
        let request = builder.body(body)?;

        match token {
            Some(token) => tracing::debug!(
                method = %method,
                target = %target,
                token_prefix = token_preview(token),
                "Forwarding to upstream"
            ),
            None => tracing::debug!(method = %method, target = %target, "Forwarding to upstream"),
        }

        let response = match tokio::time::timeout(self.timeout, self.client.request(request)).await
        {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => {
                // The legacy client's Display hides the io cause; keep it.
                let reason = match std::error::Error::source(&e) {
                    Some(source) => format!("{}: {}", e, source),
                    None => e.to_string(),
                };
                tracing::error!(target = %target, error = %reason, "Upstream request failed");
                return Err(GatewayError::UpstreamUnreachable(reason));
            }
            Err(_) => {
                tracing::error!(
                    target = %target,
                    timeout_secs = self.timeout.as_secs(),
                    "Upstream request timed out"
                );
                return Err(GatewayError::UpstreamTimeout(self.timeout.as_secs()));
            }
        };

        let status = response.status();
        if status.is_success() {
            tracing::debug!(target = %target, status = %status, "Upstream responded");
        } else {
            tracing::warn!(target = %target, status = %status, "Upstream returned error status");
        }

        // Relay status, headers, and body unchanged.
        let (parts, body) = response.into_parts();
        Ok(Response::from_parts(parts, Body::new(body)))
    }
}

/// First 10 characters of a token, for log lines that must not leak the
/// full credential.
pub fn token_preview(token: &str) -> &str {
    match token.char_indices().nth(10) {
        Some((idx, _)) => &token[..idx],
        None => token,
    }
}
