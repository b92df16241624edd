//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, routing table, middleware)
//!     → auth.rs (bearer extraction for header-authenticated routes)
//!     → handlers (one upstream call each)
//!     → shell.rs (static HTML for unmatched paths)
//! ```

pub mod auth;
pub mod server;
pub mod shell;

pub use server::{AppState, HttpServer};
