//! Operator routes: login/logout, ticket listing, messaging, ticket close.
//!
//! Read routes authenticate with the `Authorization` header (validated for
//! the `"Bearer "` prefix before any upstream call); write routes carry the
//! token as a form field, the way the browser forms submit it.

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::Response;
use axum::Form;
use serde::Deserialize;
use serde_json::json;

use crate::http::auth::bearer_token;
use crate::http::server::AppState;
use crate::upstream::GatewayError;

#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// POST /operator/login → POST {base}/token/
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response, GatewayError> {
    let payload = json!({
        "username": form.username,
        "password": form.password,
    });
    state.upstream.post_json("/token/", None, &payload).await
}

/// GET /operator/tickets → GET {base}/tickets/
pub async fn list_tickets(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, GatewayError> {
    let token = bearer_token(&headers)?;
    state.upstream.get("/tickets/", Some(token)).await
}

/// GET /operator/ticket/{id}/messages → GET {base}/tickets/{id}/messages/
pub async fn ticket_messages(
    State(state): State<AppState>,
    Path(ticket_id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, GatewayError> {
    let token = bearer_token(&headers)?;
    let path = format!("/tickets/{}/messages/", ticket_id);
    state.upstream.get(&path, Some(token)).await
}

#[derive(Deserialize)]
pub struct MessageForm {
    pub token: String,
    pub ticket_id: String,
    pub content: String,
}

/// POST /operator/message → POST {base}/tickets/{id}/messages/
pub async fn send_message(
    State(state): State<AppState>,
    Form(form): Form<MessageForm>,
) -> Result<Response, GatewayError> {
    let path = format!("/tickets/{}/messages/", form.ticket_id);
    let payload = json!({
        "sender": "operator",
        "recipient": "user",
        "content": form.content,
    });
    state.upstream.post_json(&path, Some(&form.token), &payload).await
}

#[derive(Deserialize)]
pub struct TokenForm {
    pub token: String,
}

/// POST /operator/logout → POST {base}/logout/
pub async fn logout(
    State(state): State<AppState>,
    Form(form): Form<TokenForm>,
) -> Result<Response, GatewayError> {
    state.upstream.post_empty("/logout/", &form.token).await
}

/// POST /operator/ticket/{id}/close → POST {base}/tickets/{id}/close/
pub async fn close_ticket(
    State(state): State<AppState>,
    Path(ticket_id): Path<String>,
    Form(form): Form<TokenForm>,
) -> Result<Response, GatewayError> {
    let path = format!("/tickets/{}/close/", ticket_id);
    state.upstream.post_empty(&path, &form.token).await
}
