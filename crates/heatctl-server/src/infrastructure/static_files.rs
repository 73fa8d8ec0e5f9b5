//! Static asset resolution and serving.
//!
//! Any GET path that does not match an API route falls through to this
//! handler, which maps the URL path onto a file under the configured static
//! root and serves it verbatim.  So `/index.html` and `/js/setpoints.js`
//! both resolve the way a plain static file server would resolve them.
//!
//! # Path safety
//!
//! The URL path is percent-decoded (so `my%20styles.css` reaches the file
//! named `my styles.css`) and then rebuilt component by component, keeping
//! only normal path segments.  Anything that decodes to `..`, a root
//! marker, or a drive prefix is rejected with `404` before it ever touches
//! the file system, so a request can never escape the static root.

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use percent_encoding::percent_decode_str;
use tracing::warn;

use crate::domain::ServerConfig;

/// Fallback handler: serves the file under the static root that
/// corresponds to the request path, byte for byte.
///
/// Responds `404` for paths that sanitize away to nothing, escape the root,
/// or do not name a regular file, and `500` for unexpected read failures.
pub async fn serve_static_asset(
    State(config): State<Arc<ServerConfig>>,
    uri: Uri,
) -> Response {
    let Some(relative) = sanitize_request_path(uri.path()) else {
        return not_found();
    };

    let full = config.static_root.join(relative);

    // Only regular files are servable; a directory (or anything else)
    // is indistinguishable from a missing asset to the client.
    match tokio::fs::metadata(&full).await {
        Ok(meta) if meta.is_file() => {}
        Ok(_) => return not_found(),
        Err(e) if e.kind() == ErrorKind::NotFound => return not_found(),
        Err(e) => {
            warn!("failed to stat static asset {}: {e}", full.display());
            return internal_error();
        }
    }

    match tokio::fs::read(&full).await {
        Ok(bytes) => {
            let content_type = content_type_for(&full);
            ([(header::CONTENT_TYPE, content_type)], bytes).into_response()
        }
        Err(e) if e.kind() == ErrorKind::NotFound => not_found(),
        Err(e) => {
            warn!("failed to read static asset {}: {e}", full.display());
            internal_error()
        }
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "not found\n").into_response()
}

fn internal_error() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "internal error\n").into_response()
}

/// Percent-decodes a URL path and rebuilds it as a relative file path of
/// plain components.
///
/// Returns `None` when nothing servable remains: the root path itself, a
/// path that decodes to `..` components or invalid UTF-8, or an
/// absolute/prefixed path.
fn sanitize_request_path(path: &str) -> Option<PathBuf> {
    // Decode before sanitizing so an encoded traversal (`%2e%2e`) is caught
    // by the component check below, not waved through as an odd file name.
    let decoded = percent_decode_str(path).decode_utf8().ok()?;

    let mut clean = PathBuf::new();

    for component in Path::new(decoded.trim_start_matches('/')).components() {
        match component {
            Component::Normal(part) => clean.push(part),
            Component::CurDir => {}
            // ParentDir, RootDir, or a Windows drive prefix — reject outright.
            _ => return None,
        }
    }

    if clean.as_os_str().is_empty() {
        None
    } else {
        Some(clean)
    }
}

/// Maps a file extension onto a `Content-Type` header value.
///
/// Covers the asset types the UI actually ships plus a few common image
/// formats; everything else is served as an opaque byte stream.
fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    match extension {
        "html" | "htm" => "text/html; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "js" => "text/javascript; charset=utf-8",
        "json" => "application/json",
        "txt" => "text/plain; charset=utf-8",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        _ => "application/octet-stream",
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
