//! Structured logging initialization.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::schema::ObservabilityConfig;

/// Initialize the tracing subscriber once at startup.
///
/// `RUST_LOG` takes precedence; otherwise the configured level applies to
/// the gateway and its HTTP middleware.
pub fn init(config: &ObservabilityConfig) {
    let default_filter = format!(
        "helpdesk_gateway={level},tower_http={level}",
        level = config.log_level
    );

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
