//! axum router, request handlers, and the serve loop.
//!
//! This module is responsible for:
//!
//! 1. Building the router: `/` (liveness probe), `/getconfig` (read),
//!    `/setconfig` (write), and a fallback that serves static assets.
//! 2. Decoding write bodies, which may be JSON or form-encoded.
//! 3. Mapping errors onto HTTP status codes via [`ApiError`].
//! 4. Binding the listener and serving until Ctrl+C.
//!
//! # Request flow
//!
//! ```text
//! GET  /            → fixed plaintext greeting
//! GET  /getconfig   → load file → parse INI → JSON object
//! POST /setconfig   → decode body → serialize INI → overwrite file
//! GET  <other path> → static asset lookup under the static root
//! ```
//!
//! # Error contract
//!
//! Store failures (missing file, malformed text, write failure) map to
//! `500` with a plain-text message.  A body that is not a flat key-value
//! object maps to `400`; a content type the service cannot decode maps to
//! `415`.  Nothing is silently masked: a malformed file never yields a
//! partially-parsed mapping.

use std::sync::Arc;

use anyhow::Context;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use heatctl_core::config::ConfigMap;
use thiserror::Error;
use tracing::{info, warn};

use crate::application::{config_store, ConfigStoreError};
use crate::domain::ServerConfig;
use crate::infrastructure::static_files::serve_static_asset;

/// Body of the root liveness probe.
const GREETING: &str = "Hi!!";

/// Errors surfaced by the HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The configuration store failed (missing file, malformed text, or a
    /// write failure).  Maps to `500`.
    #[error(transparent)]
    Store(#[from] ConfigStoreError),

    /// The request body is not a flat key-value mapping.  Maps to `400`.
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// The request carried a content type the service cannot decode.
    /// Maps to `415`.
    #[error("unsupported content type: '{0}' (expected JSON or form data)")]
    UnsupportedContentType(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::UnsupportedContentType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        };
        warn!("request failed ({}): {}", status, self);
        (status, format!("{}\n", self)).into_response()
    }
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Builds the service router over a shared [`ServerConfig`].
///
/// Exact routes take precedence over the fallback, so `/getconfig` is never
/// shadowed by a static file of the same name.
pub fn router(config: Arc<ServerConfig>) -> Router {
    Router::new()
        .route("/", get(root_probe))
        .route("/getconfig", get(get_config))
        .route("/setconfig", post(set_config))
        .fallback(serve_static_asset)
        .with_state(config)
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /` — fixed plaintext greeting, used only as a liveness indicator.
async fn root_probe() -> &'static str {
    GREETING
}

/// `GET /getconfig` — loads the configuration file and returns it as a flat
/// JSON object.
async fn get_config(
    State(config): State<Arc<ServerConfig>>,
) -> Result<Json<ConfigMap>, ApiError> {
    let map = config_store::load_mapping(&config.config_file).await?;
    Ok(Json(map))
}

/// `POST /setconfig` — decodes the posted mapping and overwrites the
/// configuration file with it (full replace, never merge).
async fn set_config(
    State(config): State<Arc<ServerConfig>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let map = decode_body(&headers, &body)?;
    config_store::save_mapping(&config.config_file, &map).await?;
    info!(
        "replaced configuration at {} with {} entries",
        config.config_file.display(),
        map.len()
    );
    Ok(StatusCode::OK)
}

// ── Body decoding ─────────────────────────────────────────────────────────────

/// Decodes a `/setconfig` body into a [`ConfigMap`] based on its content
/// type.
///
/// Accepts `application/json` (flat object) and
/// `application/x-www-form-urlencoded` (key-value pairs), matching what a
/// browser posts from the served form with and without script support.
fn decode_body(headers: &HeaderMap, body: &[u8]) -> Result<ConfigMap, ApiError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    // `starts_with` tolerates a trailing `; charset=...` parameter.
    if content_type.starts_with("application/json") {
        decode_json_body(body)
    } else if content_type.starts_with("application/x-www-form-urlencoded") {
        decode_form_body(body)
    } else {
        Err(ApiError::UnsupportedContentType(content_type.to_string()))
    }
}

/// Decodes a flat JSON object into a [`ConfigMap`].
///
/// Scalar values are stringified the way they will be written to the file:
/// strings verbatim, numbers and booleans via their canonical text form,
/// `null` as an empty value.  Nested arrays and objects are rejected —
/// the file format is flat.
fn decode_json_body(body: &[u8]) -> Result<ConfigMap, ApiError> {
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|e| ApiError::InvalidBody(e.to_string()))?;

    let serde_json::Value::Object(object) = value else {
        return Err(ApiError::InvalidBody(
            "expected a flat JSON object".to_string(),
        ));
    };

    let mut map = ConfigMap::new();
    for (key, value) in object {
        let text = match value {
            serde_json::Value::String(s) => s,
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::Bool(b) => b.to_string(),
            serde_json::Value::Null => String::new(),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
                return Err(ApiError::InvalidBody(format!(
                    "key '{key}': nested values are not supported"
                )));
            }
        };
        insert_entry(&mut map, key, text)?;
    }
    Ok(map)
}

/// Decodes a form-encoded body into a [`ConfigMap`].
fn decode_form_body(body: &[u8]) -> Result<ConfigMap, ApiError> {
    let pairs: Vec<(String, String)> =
        serde_urlencoded::from_bytes(body).map_err(|e| ApiError::InvalidBody(e.to_string()))?;

    let mut map = ConfigMap::new();
    for (key, value) in pairs {
        insert_entry(&mut map, key, value)?;
    }
    Ok(map)
}

/// Inserts one entry after checking it can survive the INI round trip.
///
/// A key containing `=` or a newline, or a value containing a newline,
/// would parse back as something else (or not at all) on the next read,
/// and a key starting with `#`, `;`, or `[` would serialize to a comment
/// line (silently dropped) or a section header (a parse error) —
/// rejecting all of these here keeps "what you wrote is what you read"
/// honest.
fn insert_entry(map: &mut ConfigMap, key: String, value: String) -> Result<(), ApiError> {
    let key = key.trim().to_string();
    if key.is_empty() {
        return Err(ApiError::InvalidBody("entry has an empty key".to_string()));
    }
    if key.contains('=') || key.contains('\n') {
        return Err(ApiError::InvalidBody(format!(
            "key '{key}' contains characters not representable in the file format"
        )));
    }
    if key.starts_with('#') || key.starts_with(';') || key.starts_with('[') {
        return Err(ApiError::InvalidBody(format!(
            "key '{key}' would read back as a comment or section header"
        )));
    }
    if value.contains('\n') {
        return Err(ApiError::InvalidBody(format!(
            "value for key '{key}' contains a newline"
        )));
    }
    map.insert(key, value);
    Ok(())
}

// ── Serve loop ────────────────────────────────────────────────────────────────

/// Binds the listener and serves requests until Ctrl+C.
///
/// # Errors
///
/// Returns an error if the TCP listener cannot be bound (e.g., the port is
/// already in use or the process lacks permission to bind).
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let addr = config.bind_addr;
    let app = router(Arc::new(config));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind HTTP listener on {addr}"))?;

    info!("heatctl listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server terminated abnormally")?;

    info!("heatctl stopped");
    Ok(())
}

/// Resolves when the process receives Ctrl+C (SIGINT on Unix).
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("received Ctrl+C — shutting down"),
        Err(e) => tracing::error!("failed to listen for Ctrl+C signal: {e}"),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
