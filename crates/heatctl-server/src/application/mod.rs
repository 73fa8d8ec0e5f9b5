//! Application layer for heatctl-server.
//!
//! The application layer knows *what* the service does with the
//! configuration file — load it into a mapping, replace it wholesale —
//! and delegates the HTTP surface to the infrastructure layer.
//!
//! # Responsibilities
//!
//! - Reading the configuration file and parsing it via `heatctl-core`
//! - Serializing an edited mapping and overwriting the file
//! - Defining [`ConfigStoreError`] so the three failure classes (missing
//!   file, malformed text, write failure) are explicit and testable
//!
//! # What does NOT belong here?
//!
//! - Routing, status codes, or request decoding (infrastructure)
//! - The INI text format itself (heatctl-core)

pub mod config_store;

// Re-export the primary entry points so handlers can call them concisely.
pub use config_store::{load_mapping, save_mapping, ConfigStoreError};
