//! heatctl-server library crate.
//!
//! This crate provides the HTTP service that exposes the heating
//! controller's flat INI configuration file for reading and writing, and
//! serves the static browser UI that edits it.
//!
//! # Architecture (clean architecture)
//!
//! ```text
//! Browser (JSON / form posts over HTTP)
//!         ↕
//! [heatctl-server]
//!   ├── domain/           Pure types: ServerConfig
//!   ├── application/      Config store: file ↔ ConfigMap via heatctl-core
//!   └── infrastructure/
//!         ├── http_server/   axum router, handlers, serve loop
//!         └── static_files/  static asset resolution and serving
//!         ↕
//! config.ini  (flat `key = value` file on disk)
//! ```
//!
//! # Layer rules
//!
//! - `domain` has no external dependencies (no I/O, no async, no frameworks).
//! - `application` depends on `domain` and `heatctl-core` plus `tokio::fs`.
//! - `infrastructure` depends on all other layers plus `axum`.
//!
//! # Request model
//!
//! Every read and write touches the file system directly; nothing is cached
//! between requests and there is no locking between concurrent reads and
//! writes.  A write racing a read may return a stale or partially-updated
//! view — accepted for a single-user controller UI, not defended against.

/// Domain layer: pure configuration types (no I/O).
pub mod domain;

/// Application layer: loading and saving the configuration mapping.
pub mod application;

/// Infrastructure layer: axum router, handlers, and static file serving.
pub mod infrastructure;
