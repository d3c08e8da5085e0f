//! Static file serving module
//!
//! Resolves request paths against the served root, reads the file and picks
//! a Content-Type from the MIME table.

use crate::config::AppState;
use crate::handler::router::RequestContext;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use percent_encoding::percent_decode_str;
use std::borrow::Cow;
use std::io;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use tokio::fs;

/// Reasons a request path could not be served
#[derive(Debug, Error)]
pub enum ServeError {
    /// Path escapes the served root (`..`, absolute or prefixed components)
    #[error("path escapes served root: {0}")]
    Forbidden(String),

    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Path names a directory; directory listing is not offered
    #[error("not a file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ServeError {
    fn from_io(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound(path)
        } else {
            Self::Io { path, source }
        }
    }
}

/// Serve the file named by `ctx.path`
pub async fn serve_path(ctx: &RequestContext<'_>, state: &AppState) -> Response<Full<Bytes>> {
    let result = match decode_path(ctx.path) {
        Ok(path) => load_file(&state.root, &path)
            .await
            .map(|content| (content, state.mime.content_type_for(&path))),
        Err(e) => Err(e),
    };

    match result {
        Ok((content, content_type)) => {
            if ctx.access_log {
                logger::log_served(content_type, &state.headers);
            }
            http::build_file_response(content, content_type, ctx.is_head)
        }
        Err(ServeError::Forbidden(path)) => {
            logger::log_warning(&format!("Path traversal attempt blocked: {path}"));
            http::build_404_response(ctx.is_head)
        }
        Err(ServeError::NotFound(file_path) | ServeError::NotAFile(file_path)) => {
            if ctx.access_log {
                logger::log_not_found(&file_path);
            }
            http::build_404_response(ctx.is_head)
        }
        Err(ServeError::Io { path, source }) => {
            logger::log_server_error(&path, &source);
            http::build_500_response(&format!("Server error: {}", source.kind()), ctx.is_head)
        }
    }
}

/// Percent-decode a URL path (`/my%20page.html` -> `/my page.html`)
///
/// Paths that do not decode to UTF-8 cannot name a file here and are reported
/// as not found.
pub fn decode_path(raw: &str) -> Result<Cow<'_, str>, ServeError> {
    percent_decode_str(raw)
        .decode_utf8()
        .map_err(|_| ServeError::NotFound(PathBuf::from(raw)))
}

/// Map a decoded request path onto a file below `root`
///
/// Leading slashes are dropped so `/a/b.css` becomes `root/a/b.css`. Any
/// component other than a plain name or `.` is rejected.
pub fn resolve_path(root: &Path, request_path: &str) -> Result<PathBuf, ServeError> {
    let relative = Path::new(request_path.trim_start_matches('/'));
    let escapes = relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes {
        return Err(ServeError::Forbidden(request_path.to_string()));
    }
    Ok(root.join(relative))
}

/// Read the file behind a decoded request path
///
/// Any failure to stat the path counts as "does not exist" (missing entry,
/// a file used as a directory, an over-long name). Only a failed read of
/// something that does exist is an I/O error.
pub async fn load_file(root: &Path, request_path: &str) -> Result<Vec<u8>, ServeError> {
    let file_path = resolve_path(root, request_path)?;

    let Ok(metadata) = fs::metadata(&file_path).await else {
        return Err(ServeError::NotFound(file_path));
    };
    if metadata.is_dir() {
        return Err(ServeError::NotAFile(file_path));
    }

    match fs::read(&file_path).await {
        Ok(content) => Ok(content),
        Err(e) => Err(ServeError::from_io(file_path, e)),
    }
}
