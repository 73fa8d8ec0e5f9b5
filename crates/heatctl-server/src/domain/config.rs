//! Server configuration types.
//!
//! [`ServerConfig`] is the single source of truth for all runtime settings.
//! It can be constructed from CLI arguments (preferred for production) or
//! from sensible defaults (useful for local development).
//!
//! # Design rationale
//!
//! The original controller hard-coded the port and file path as process-wide
//! constants.  Keeping them in a plain struct instead — no global state, no
//! environment reads inside the domain — lets tests inject a temporary
//! config file and an ephemeral port without touching process state.  The
//! binary is responsible for populating the struct from CLI args or
//! environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

/// All runtime configuration for the HTTP service.
///
/// Build this struct once at startup (via CLI args or defaults) and then
/// wrap it in an `Arc` so it can be shared cheaply across request handlers.
///
/// # Example
///
/// ```rust
/// use heatctl_server::domain::ServerConfig;
///
/// // Defaults are suitable for local development:
/// let cfg = ServerConfig::default();
/// assert_eq!(cfg.bind_addr.port(), 8080);
/// ```
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The address and port the HTTP server binds to.
    ///
    /// `0.0.0.0` accepts connections from any network interface (LAN +
    /// localhost).  Set to `127.0.0.1` to accept only local connections.
    pub bind_addr: SocketAddr,

    /// Path of the flat INI configuration file the service reads and
    /// overwrites.
    ///
    /// Relative paths resolve against the process working directory.
    pub config_file: PathBuf,

    /// Root directory for static browser assets (HTML, CSS, JS).
    ///
    /// Files under this directory are served verbatim at their
    /// corresponding URL paths.
    pub static_root: PathBuf,
}

impl Default for ServerConfig {
    /// Returns a `ServerConfig` suitable for local development without any
    /// external configuration.
    ///
    /// | Field        | Default        |
    /// |--------------|----------------|
    /// | bind_addr    | `0.0.0.0:8080` |
    /// | config_file  | `config.ini`   |
    /// | static_root  | `static`       |
    fn default() -> Self {
        Self {
            // The `.parse().unwrap()` call here is safe because this is a
            // compile-time-known valid socket address string.
            bind_addr: "0.0.0.0:8080".parse().unwrap(),
            config_file: PathBuf::from("config.ini"),
            static_root: PathBuf::from("static"),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
