//! Upstream ticketing API subsystem.
//!
//! # Data Flow
//! ```text
//! handler extracts credentials + body
//!     → client.rs (build request, attach bearer, enforce deadline)
//!     → upstream ticketing API
//!     → client.rs (relay status/headers/body verbatim)
//!     → error.rs (translate local failures into HTTP errors)
//! ```
//!
//! # Design Decisions
//! - Exactly one upstream call per inbound request, no retries
//! - Upstream responses are never interpreted, only relayed
//! - Network failures and timeouts both map to 503

pub mod client;
pub mod error;

pub use client::UpstreamClient;
pub use error::GatewayError;
