//! Shared domain types for the Ramadan Helper gateway.
//!
//! Holds the DTOs exchanged with the backend, the catalogue of gateway
//! operations, and the scalar aliases both use. Nothing here performs I/O.

pub mod models;
pub mod nullable;
pub mod operation;
pub mod types;
