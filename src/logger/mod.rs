//! Logger module
//!
//! Provides logging utilities for the HTTP server including:
//! - Startup banner
//! - Per-request lines with ISO-8601 timestamps
//! - Error and warning logging
//!
//! Info goes to stdout, warnings and errors to stderr.

mod banner;

pub use banner::render_banner;

use chrono::{SecondsFormat, Utc};
use hyper::Method;
use std::net::SocketAddr;
use std::path::Path;

use crate::config::Config;
use crate::http::HeaderSet;
use crate::http::headers::{COEP, COOP};

/// Write to info/access log
fn write_info(message: &str) {
    println!("{message}");
}

/// Write to error log
fn write_error(message: &str) {
    eprintln!("{message}");
}

/// Current UTC time, e.g. `2026-10-19T08:30:00.123Z`
fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    write_info(&render_banner(addr));
    write_info(&format!("[CONFIG] Serving files from: {}", config.server.root));
    if let Some(workers) = config.server.workers {
        write_info(&format!("[CONFIG] Worker threads: {workers}"));
    }
}

/// `[timestamp] METHOD /path?query`
pub fn log_request(method: &Method, target: &str) {
    write_info(&format!("[{}] {method} {target}", timestamp()));
}

/// Outcome lines for a served file
pub fn log_served(content_type: &str, headers: &HeaderSet) {
    write_info(&format!("  → 200 OK ({content_type})"));
    write_info(&format!("  → COOP: {}", headers.get(COOP).unwrap_or("-")));
    write_info(&format!("  → COEP: {}", headers.get(COEP).unwrap_or("-")));
}

pub fn log_not_found(file_path: &Path) {
    write_info(&format!("  → 404 Not Found: {}", file_path.display()));
}

pub fn log_server_error(file_path: &Path, err: &std::io::Error) {
    write_error(&format!("  → 500 Error: {} ({})", err.kind(), file_path.display()));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

pub fn log_bind_failed(addr: &SocketAddr, err: &std::io::Error) {
    log_error(&format!("✗ Failed to bind {addr}: {err}"));
    if err.kind() == std::io::ErrorKind::AddrInUse {
        write_error("        Another process is already listening on this port");
    }
}

pub fn log_shutdown(reason: &str) {
    write_info(&format!("\n[SIGNAL] {reason} received, shutting down"));
}
