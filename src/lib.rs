//! Helpdesk Frontend Gateway Library

pub mod config;
pub mod handlers;
pub mod http;
pub mod observability;
pub mod upstream;

pub use config::schema::GatewayConfig;
pub use http::HttpServer;
pub use upstream::UpstreamClient;
