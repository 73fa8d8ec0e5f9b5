//! # heatctl-core
//!
//! Shared library for the heatctl controller containing the flat INI
//! configuration codec and the setpoint adjustment arithmetic.
//!
//! This crate is used by the HTTP server and by tests.  It has zero
//! dependencies on I/O, async runtimes, or web frameworks.
//!
//! # Architecture overview (for beginners)
//!
//! heatctl is a small heating-controller front end: a single `config.ini`
//! file holds the controller's settings (target temperatures, schedule
//! hours), an HTTP service exposes that file for reading and writing, and
//! a browser UI nudges the numeric values up and down in fixed steps.
//!
//! This crate (`heatctl-core`) is the pure-logic foundation.  It defines:
//!
//! - **`config`** – How the settings file is read and written.  The file is
//!   a flat list of `key = value` lines (INI without sections); the codec
//!   converts between that text and an in-memory string map, failing
//!   loudly on malformed input.
//!
//! - **`setpoint`** – The adjustment rules for numeric fields.  Temperature
//!   steps (±0.1 °C) clamp at fixed bounds; hour steps (±1) wrap around a
//!   24-hour cycle.  The asymmetry is deliberate and normative.

// Declare the two top-level modules.  Rust will look for each in a
// subdirectory with the same name (e.g., src/config/mod.rs).
pub mod config;
pub mod setpoint;

// Re-export the most-used items at the crate root so callers can write
// `heatctl_core::parse_ini` instead of `heatctl_core::config::parse_ini`.
pub use config::{parse_ini, serialize_ini, ConfigMap, IniError};
pub use setpoint::{Adjustment, SetpointError};
