//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the full routing table
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind server to listener
//! - Serve the static HTML shell for unmatched paths
//!
//! Every API route maps to exactly one upstream call; the routing table
//! lives here so the whole inbound surface is visible in one place.

use axum::{
    extract::State,
    http::{Method, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post, put},
    Router,
};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::GatewayConfig;
use crate::handlers;
use crate::http::shell;
use crate::upstream::UpstreamClient;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<UpstreamClient>,
    pub shell: Arc<str>,
}

/// HTTP server for the gateway.
pub struct HttpServer {
    router: Router,
    config: GatewayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// Reads the HTML shell from disk when one is configured, so a bad
    /// `ui.index_path` fails at startup.
    pub fn new(config: GatewayConfig) -> io::Result<Self> {
        let shell = shell::load(config.ui.index_path.as_deref())?;

        let state = AppState {
            upstream: Arc::new(UpstreamClient::new(&config.upstream)),
            shell: Arc::from(shell),
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all routes and middleware layers.
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        Router::new()
            // User actions
            .route("/user/login", post(handlers::user::login))
            .route("/user/ticket", post(handlers::user::create_ticket))
            .route("/user/message", post(handlers::user::send_message))
            .route("/user/tickets", get(handlers::user::list_tickets))
            // Operator actions
            .route("/operator/login", post(handlers::operator::login))
            .route("/operator/tickets", get(handlers::operator::list_tickets))
            .route(
                "/operator/ticket/{ticket_id}/messages",
                get(handlers::operator::ticket_messages),
            )
            .route("/operator/message", post(handlers::operator::send_message))
            .route("/operator/logout", post(handlers::operator::logout))
            .route(
                "/operator/ticket/{ticket_id}/close",
                post(handlers::operator::close_ticket),
            )
            // Whitelist management
            .route("/operator/whitelist", get(handlers::whitelist::pending))
            .route("/operator/whitelist/all", get(handlers::whitelist::all))
            .route(
                "/operator/whitelist/{telegram_id}/edit",
                post(handlers::whitelist::edit),
            )
            // Endpoint settings (opaque passthrough)
            .route(
                "/operator/settings/",
                get(handlers::settings::list).post(handlers::settings::create),
            )
            .route(
                "/operator/settings/{id}",
                put(handlers::settings::update).delete(handlers::settings::remove),
            )
            // Lowest priority: the browser client handles unmatched paths.
            .fallback(serve_shell)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

/// Catch-all handler: serve the HTML shell for any unmatched GET.
async fn serve_shell(State(state): State<AppState>, method: Method) -> Response {
    match method {
        Method::GET | Method::HEAD => Html(state.shell.to_string()).into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
