//! Backend operations, one module per subdomain.
//!
//! Each module adds an `impl GatewayClient` block. Paths are relative to
//! the configured base URL (which carries the `/api` prefix).

pub mod chat;
pub mod dua;
pub mod health;
pub mod history;
pub mod identity;
pub mod imams;
pub mod knowledge;
pub mod videos;
