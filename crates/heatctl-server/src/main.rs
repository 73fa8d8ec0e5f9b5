//! heatctl HTTP service — entry point.
//!
//! This binary serves a single flat INI configuration file over HTTP and
//! hosts the static browser UI that edits it.  Reading `/getconfig` parses
//! the file into a JSON object; posting `/setconfig` replaces the file with
//! the posted mapping; every other GET path is looked up under the static
//! asset root.
//!
//! # Usage
//!
//! ```text
//! heatctl-server [OPTIONS]
//!
//! Options:
//!   --port        <PORT>   HTTP listener port [default: 8080]
//!   --bind        <ADDR>   IP address to bind [default: 0.0.0.0]
//!   --config-file <PATH>   Flat INI configuration file [default: config.ini]
//!   --static-root <PATH>   Static asset directory [default: static]
//! ```
//!
//! # Environment variable overrides
//!
//! The CLI defaults can also be overridden with environment variables.
//! CLI args take precedence when both are present.
//!
//! | Variable              | Default      | Description               |
//! |-----------------------|--------------|---------------------------|
//! | `HEATCTL_PORT`        | `8080`       | HTTP listener port        |
//! | `HEATCTL_BIND`        | `0.0.0.0`    | Bind address              |
//! | `HEATCTL_CONFIG_FILE` | `config.ini` | Configuration file path   |
//! | `HEATCTL_STATIC_ROOT` | `static`     | Static asset directory    |

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use heatctl_server::domain::ServerConfig;
use heatctl_server::infrastructure::run_server;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// heatctl configuration service.
///
/// Serves the controller's flat INI configuration file for reading and
/// writing, plus the browser UI that nudges its numeric setpoints.
#[derive(Debug, Parser)]
#[command(
    name = "heatctl-server",
    about = "HTTP service for the heatctl configuration file and browser UI",
    version
)]
struct Cli {
    /// TCP port for the HTTP server to listen on.
    #[arg(long, default_value_t = 8080, env = "HEATCTL_PORT")]
    port: u16,

    /// IP address to bind the HTTP server to.
    ///
    /// Use `0.0.0.0` to accept connections from any network interface (LAN +
    /// localhost), or `127.0.0.1` to accept only local connections.
    #[arg(long, default_value = "0.0.0.0", env = "HEATCTL_BIND")]
    bind: String,

    /// Path of the flat INI configuration file.
    #[arg(long, default_value = "config.ini", env = "HEATCTL_CONFIG_FILE")]
    config_file: PathBuf,

    /// Root directory for static browser assets.
    #[arg(long, default_value = "static", env = "HEATCTL_STATIC_ROOT")]
    static_root: PathBuf,
}

impl Cli {
    /// Converts the parsed CLI arguments into a [`ServerConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if `--bind` is not a valid IP address.
    fn into_server_config(self) -> anyhow::Result<ServerConfig> {
        let bind_addr: SocketAddr = format!("{}:{}", self.bind, self.port)
            .parse()
            .with_context(|| format!("invalid bind address: '{}:{}'", self.bind, self.port))?;

        Ok(ServerConfig {
            bind_addr,
            config_file: self.config_file,
            static_root: self.static_root,
        })
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Program entry point.
///
/// Initialises logging (level from `RUST_LOG`, default `info`), parses the
/// CLI into a [`ServerConfig`], and runs the serve loop until Ctrl+C.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // `EnvFilter::try_from_default_env()` reads the `RUST_LOG` environment
    // variable.  If it is absent or invalid, we fall back to `info` level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.into_server_config()?;

    info!(
        "heatctl starting — addr={}, config={}, static={}",
        config.bind_addr,
        config.config_file.display(),
        config.static_root.display()
    );

    run_server(config).await
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_port() {
        // Arrange: parse with no arguments (all defaults apply)
        let cli = Cli::parse_from(["heatctl-server"]);

        // Assert
        assert_eq!(cli.port, 8080);
    }

    #[test]
    fn test_cli_default_bind() {
        let cli = Cli::parse_from(["heatctl-server"]);
        assert_eq!(cli.bind, "0.0.0.0");
    }

    #[test]
    fn test_cli_default_config_file() {
        let cli = Cli::parse_from(["heatctl-server"]);
        assert_eq!(cli.config_file, PathBuf::from("config.ini"));
    }

    #[test]
    fn test_cli_default_static_root() {
        let cli = Cli::parse_from(["heatctl-server"]);
        assert_eq!(cli.static_root, PathBuf::from("static"));
    }

    #[test]
    fn test_cli_port_override() {
        let cli = Cli::parse_from(["heatctl-server", "--port", "9999"]);
        assert_eq!(cli.port, 9999);
    }

    #[test]
    fn test_cli_config_file_override() {
        let cli = Cli::parse_from(["heatctl-server", "--config-file", "/tmp/heat.ini"]);
        assert_eq!(cli.config_file, PathBuf::from("/tmp/heat.ini"));
    }

    #[test]
    fn test_into_server_config_default_addr() {
        // Arrange
        let cli = Cli::parse_from(["heatctl-server"]);

        // Act
        let config = cli.into_server_config().unwrap();

        // Assert
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.bind_addr.ip().to_string(), "0.0.0.0");
    }

    #[test]
    fn test_into_server_config_custom_port_and_bind() {
        let cli = Cli::parse_from(["heatctl-server", "--bind", "127.0.0.1", "--port", "8181"]);
        let config = cli.into_server_config().unwrap();
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8181");
    }

    #[test]
    fn test_into_server_config_invalid_bind_returns_error() {
        // Arrange: provide an invalid IP address string
        let cli = Cli {
            port: 8080,
            bind: "not.an.ip".to_string(),
            config_file: PathBuf::from("config.ini"),
            static_root: PathBuf::from("static"),
        };

        // Act
        let result = cli.into_server_config();

        // Assert: must return an error, not panic
        assert!(result.is_err());
    }
}
