//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via tracing; no println
//! - `RUST_LOG` overrides the configured level
//! - Tokens appear in logs only as a 10-character prefix
//! - Logging never blocks or fails the response path

pub mod logging;
