//! HTTP protocol layer module
//!
//! Response builders, the MIME table and the header set injected into every
//! response. Kept free of routing decisions.

pub mod headers;
pub mod mime;
pub mod response;

// Re-export commonly used types
pub use headers::HeaderSet;
pub use mime::MimeTable;
pub use response::{
    build_404_response, build_405_response, build_500_response, build_file_response,
    build_json_response, build_options_response,
};
