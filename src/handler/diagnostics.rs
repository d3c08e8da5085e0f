//! Header diagnostic endpoint
//!
//! `GET /test-headers` echoes the header set so a browser or `curl -i` can
//! confirm the isolation headers actually arrive.

use crate::config::AppState;
use crate::handler::router::RequestContext;
use crate::http::{self, HeaderSet};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

pub const TEST_HEADERS_PATH: &str = "/test-headers";
pub const TEST_HEADERS_MESSAGE: &str = "Headers are being sent!";

#[derive(Debug, Serialize)]
struct HeaderReport<'a> {
    message: &'static str,
    headers: &'a HeaderSet,
}

pub fn serve_test_headers(ctx: &RequestContext<'_>, state: &AppState) -> Response<Full<Bytes>> {
    let report = HeaderReport {
        message: TEST_HEADERS_MESSAGE,
        headers: &state.headers,
    };
    http::build_json_response(StatusCode::OK, &report, ctx.is_head)
}
