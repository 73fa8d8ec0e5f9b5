//! Domain layer for heatctl-server.
//!
//! The domain layer contains pure types that have no dependencies on I/O,
//! the async runtime, or web frameworks, so they can be constructed freely
//! in tests.
//!
//! # What belongs in the domain layer?
//!
//! - The [`ServerConfig`] struct (addresses and paths, nothing live)
//!
//! # What does NOT belong here?
//!
//! - Any `tokio` or `axum` types
//! - File I/O or environment variable reading

pub mod config;

// Re-export so callers can write `domain::ServerConfig`.
pub use config::ServerConfig;
