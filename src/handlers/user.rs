//! User-facing routes: login, tickets, messages.
//!
//! All user routes carry the token as a form field or query parameter; the
//! token is forwarded as a bearer credential without validation.

use axum::extract::{Query, State};
use axum::response::Response;
use axum::Form;
use serde::Deserialize;
use serde_json::json;

use crate::http::server::AppState;
use crate::upstream::GatewayError;

#[derive(Deserialize)]
pub struct LoginForm {
    pub telegram_id: String,
}

/// POST /user/login → POST {base}/consumers/token/
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response, GatewayError> {
    let payload = json!({ "telegram_id": form.telegram_id });
    state.upstream.post_json("/consumers/token/", None, &payload).await
}

#[derive(Deserialize)]
pub struct TicketForm {
    pub token: String,
    pub subject: String,
    pub description: String,
    pub source: String,
}

/// POST /user/ticket → POST {base}/tickets/create
pub async fn create_ticket(
    State(state): State<AppState>,
    Form(form): Form<TicketForm>,
) -> Result<Response, GatewayError> {
    let payload = json!({
        "subject": form.subject,
        "description": form.description,
        "source": form.source,
    });
    state
        .upstream
        .post_json("/tickets/create", Some(&form.token), &payload)
        .await
}

#[derive(Deserialize)]
pub struct MessageForm {
    pub token: String,
    pub ticket_id: String,
    pub content: String,
}

/// POST /user/message → POST {base}/tickets/{id}/messages/
///
/// Sender and recipient are fixed by the route.
pub async fn send_message(
    State(state): State<AppState>,
    Form(form): Form<MessageForm>,
) -> Result<Response, GatewayError> {
    let path = format!("/tickets/{}/messages/", form.ticket_id);
    let payload = json!({
        "sender": "user",
        "recipient": "operator",
        "content": form.content,
    });
    state.upstream.post_json(&path, Some(&form.token), &payload).await
}

#[derive(Deserialize)]
pub struct TokenQuery {
    pub token: String,
}

/// GET /user/tickets → GET {base}/tickets/
pub async fn list_tickets(
    State(state): State<AppState>,
    Query(query): Query<TokenQuery>,
) -> Result<Response, GatewayError> {
    state.upstream.get("/tickets/", Some(&query.token)).await
}
