//! Request handler module
//!
//! Responsible for request routing dispatch and business logic processing:
//! static file serving from the served root and the header diagnostic.

pub mod diagnostics;
pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
