//! MIME type detection module
//!
//! Returns the corresponding Content-Type based on file extension.

use std::collections::HashMap;
use std::path::Path;

pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Extension (leading dot included) to Content-Type mapping
#[derive(Debug, Clone)]
pub struct MimeTable {
    types: HashMap<&'static str, &'static str>,
}

impl MimeTable {
    /// Table of the types a browser front-end typically needs
    pub fn web() -> Self {
        let types = HashMap::from([
            (".html", "text/html"),
            (".js", "application/javascript"),
            (".css", "text/css"),
            (".json", "application/json"),
            (".png", "image/png"),
            (".jpg", "image/jpeg"),
            (".gif", "image/gif"),
            (".svg", "image/svg+xml"),
            (".ico", "image/x-icon"),
        ]);
        Self { types }
    }

    /// Exact, case-sensitive lookup of a dotted extension
    ///
    /// # Examples
    /// ```
    /// use coi_server::http::mime::MimeTable;
    /// let table = MimeTable::web();
    /// assert_eq!(table.lookup(".html"), "text/html");
    /// assert_eq!(table.lookup(".HTML"), "application/octet-stream");
    /// ```
    pub fn lookup(&self, extension: &str) -> &'static str {
        self.types
            .get(extension)
            .copied()
            .unwrap_or(DEFAULT_CONTENT_TYPE)
    }

    /// Content-Type for a request path, based on its last extension
    pub fn content_type_for(&self, path: &str) -> &'static str {
        extension_of(path).map_or(DEFAULT_CONTENT_TYPE, |ext| self.lookup(&ext))
    }
}

/// Dotted extension of the last path segment
///
/// Dotfiles such as `.bashrc` have no extension; `name.` yields `"."`.
pub fn extension_of(path: &str) -> Option<String> {
    Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_types() {
        let table = MimeTable::web();
        assert_eq!(table.lookup(".html"), "text/html");
        assert_eq!(table.lookup(".css"), "text/css");
        assert_eq!(table.lookup(".js"), "application/javascript");
        assert_eq!(table.lookup(".json"), "application/json");
        assert_eq!(table.lookup(".png"), "image/png");
        assert_eq!(table.lookup(".jpg"), "image/jpeg");
        assert_eq!(table.lookup(".ico"), "image/x-icon");
    }

    #[test]
    fn test_unknown_extension() {
        let table = MimeTable::web();
        assert_eq!(table.lookup(".wasm"), DEFAULT_CONTENT_TYPE);
        assert_eq!(table.lookup("html"), DEFAULT_CONTENT_TYPE);
        assert_eq!(table.lookup(".JPG"), DEFAULT_CONTENT_TYPE);
        assert_eq!(table.lookup(".jpeg"), DEFAULT_CONTENT_TYPE);
    }

    #[test]
    fn test_content_type_for_path() {
        let table = MimeTable::web();
        assert_eq!(table.content_type_for("/index.html"), "text/html");
        assert_eq!(table.content_type_for("/assets/app.min.js"), "application/javascript");
        assert_eq!(table.content_type_for("/archive.tar.gz"), DEFAULT_CONTENT_TYPE);
        assert_eq!(table.content_type_for("/LICENSE"), DEFAULT_CONTENT_TYPE);
        assert_eq!(table.content_type_for("/.html"), DEFAULT_CONTENT_TYPE);
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("/a/b/style.css").as_deref(), Some(".css"));
        assert_eq!(extension_of("/a.b/readme").as_deref(), None);
        assert_eq!(extension_of("/.bashrc").as_deref(), None);
        assert_eq!(extension_of("/trailing.").as_deref(), Some("."));
    }
}
