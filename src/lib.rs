//! Local static file server with cross-origin isolation headers.
//!
//! Serves files from a directory on `127.0.0.1:5500` and stamps every
//! response with `Cross-Origin-Opener-Policy`/`Cross-Origin-Embedder-Policy`
//! plus no-cache headers, so pages can use `SharedArrayBuffer` during local
//! development.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;

#[cfg(test)]
pub(crate) mod test_support;
