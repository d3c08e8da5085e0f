//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, route
//! matching, dispatch, and finally header injection on whatever came back.

use crate::config::AppState;
use crate::handler::{diagnostics, static_files};
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

pub const INDEX_PATH: &str = "/index.html";

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    /// URL path with the query removed, `/` already mapped to the index file
    pub path: &'a str,
    pub is_head: bool,
    pub access_log: bool,
}

/// Main entry point for HTTP request handling
///
/// Generic over the body type since no route reads a request body.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let uri = req.uri();

    let access_log = state.access_log();
    if access_log {
        let target = uri.path_and_query().map_or(uri.path(), |pq| pq.as_str());
        logger::log_request(method, target);
    }

    let mut response = match check_http_method(method) {
        Some(resp) => resp,
        None => {
            let ctx = RequestContext {
                path: route_path(uri.path()),
                is_head: *method == Method::HEAD,
                access_log,
            };
            route_request(&ctx, &state).await
        }
    };

    state.headers.apply(response.headers_mut());
    Ok(response)
}

/// Check HTTP method and return appropriate response for non-GET/HEAD methods
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::HEAD => None,
        Method::OPTIONS => Some(http::build_options_response()),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Map `/` onto the index file
///
/// Takes `Uri::path`, which already excludes the query, so `/?v=2` and
/// `/index.html?foo=bar` arrive here as `/` and `/index.html`.
pub fn route_path(path: &str) -> &str {
    if path == "/" {
        INDEX_PATH
    } else {
        path
    }
}

/// Route request based on path
async fn route_request(ctx: &RequestContext<'_>, state: &AppState) -> Response<Full<Bytes>> {
    if ctx.path == diagnostics::TEST_HEADERS_PATH {
        return diagnostics::serve_test_headers(ctx, state);
    }
    static_files::serve_path(ctx, state).await
}
