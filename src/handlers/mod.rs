//! Inbound route handlers.
//!
//! Each handler does at most three things: extract credentials and body,
//! issue exactly one upstream call, relay the result. No handler owns
//! state, interprets payloads, or retries.

pub mod operator;
pub mod settings;
pub mod user;
pub mod whitelist;
