//! Infrastructure layer for heatctl-server.
//!
//! The infrastructure layer handles the HTTP surface: routing, request
//! decoding, response encoding, static asset serving, and the serve loop.
//!
//! # Responsibilities
//!
//! - Building the axum router and binding the TCP listener
//! - Decoding JSON / form-encoded request bodies into a `ConfigMap`
//! - Mapping application errors onto HTTP status codes
//! - Resolving and serving static browser assets
//! - Handling the graceful shutdown signal
//!
//! # What does NOT belong here?
//!
//! - File persistence logic (that is the application layer)
//! - The INI text format (heatctl-core)
//! - Configuration parsing from CLI args (that is done in `main.rs`)

pub mod http_server;
pub mod static_files;

// Re-export the primary entry points so `main.rs` can call them concisely.
pub use http_server::{router, run_server, ApiError};
