//! Whitelist management routes.
//!
//! The edit body exists in two wire revisions: the current contract carries
//! a `permission` string forwarded verbatim, the legacy one a `perm` string
//! coerced to a boolean. The variant is tagged by which field is present;
//! a body carrying both (or neither) is a client error.

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::http::auth::bearer_token;
use crate::http::server::AppState;
use crate::upstream::GatewayError;

/// GET /operator/whitelist → GET {base}/operator/whitelist/
pub async fn pending(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, GatewayError> {
    let token = bearer_token(&headers)?;
    state.upstream.get("/operator/whitelist/", Some(token)).await
}

/// GET /operator/whitelist/all → GET {base}/operator/whitelist/all
pub async fn all(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, GatewayError> {
    let token = bearer_token(&headers)?;
    state.upstream.get("/operator/whitelist/all", Some(token)).await
}

/// Raw edit body; exactly one of the two fields must be present.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WhitelistEditBody {
    permission: Option<String>,
    perm: Option<String>,
}

/// Versioned edit contract, tagged by which field the body carried.
#[derive(Debug, PartialEq)]
pub enum WhitelistEdit {
    /// Current contract: the string is forwarded verbatim.
    Permission(String),
    /// Legacy contract: the string is coerced to a boolean.
    LegacyPerm(String),
}

impl TryFrom<WhitelistEditBody> for WhitelistEdit {
    type Error = GatewayError;

    fn try_from(body: WhitelistEditBody) -> Result<Self, GatewayError> {
        match (body.permission, body.perm) {
            (Some(permission), None) => Ok(WhitelistEdit::Permission(permission)),
            (None, Some(perm)) => Ok(WhitelistEdit::LegacyPerm(perm)),
            _ => Err(GatewayError::AmbiguousWhitelistEdit),
        }
    }
}

impl WhitelistEdit {
    /// Upstream payload for this revision of the edit contract.
    pub fn upstream_payload(&self) -> Value {
        match self {
            WhitelistEdit::Permission(permission) => json!({ "permission": permission }),
            WhitelistEdit::LegacyPerm(perm) => json!({ "perm": perm == "true" }),
        }
    }
}

/// POST /operator/whitelist/{id}/edit → POST {base}/operator/whitelist/{id}/edit
pub async fn edit(
    State(state): State<AppState>,
    Path(telegram_id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<WhitelistEditBody>,
) -> Result<Response, GatewayError> {
    let token = bearer_token(&headers)?;
    let edit = WhitelistEdit::try_from(body)?;
    let path = format!("/operator/whitelist/{}/edit", telegram_id);
    state
        .upstream
        .post_json(&path, Some(token), &edit.upstream_payload())
        .await
}
