//! Typed HTTP gateway to the Ramadan Helper backend.
//!
//! [`GatewayClient`] exposes one async method per backend operation. Each
//! method builds a single request from its typed arguments, sends it, and
//! returns the decoded payload or a [`GatewayError`] naming the operation.
//! The client holds no domain state and is cheap to clone.

pub mod api;
pub mod client;
pub mod config;
pub mod error;

pub use client::GatewayClient;
pub use config::GatewayConfig;
pub use error::{GatewayError, GatewayResult};
