use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use coi_server::config::AppState;
use coi_server::server::{create_listener, start_server_loop};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::oneshot;

struct Site {
    root: PathBuf,
}

impl Site {
    fn new(label: &str) -> Self {
        let root = std::env::temp_dir().join(format!(
            "coi-server-it-{label}-{}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&root);
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(root.join("index.html"), "<h1>hi</h1>").unwrap();
        std::fs::write(root.join("style.css"), "body{}").unwrap();
        Self { root }
    }

    fn path(&self) -> &Path {
        &self.root
    }
}

impl Drop for Site {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.root);
    }
}

struct RawResponse {
    status: u16,
    headers: Vec<(String, String)>,
    body: String,
}

impl RawResponse {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    fn assert_isolation_headers(&self) {
        assert_eq!(self.header("Cross-Origin-Opener-Policy"), Some("same-origin"));
        assert_eq!(self.header("Cross-Origin-Embedder-Policy"), Some("credentialless"));
        assert_eq!(
            self.header("Cache-Control"),
            Some("no-cache, no-store, must-revalidate")
        );
        assert_eq!(self.header("Pragma"), Some("no-cache"));
        assert_eq!(self.header("Expires"), Some("0"));
    }
}

async fn start(site: &Site) -> (SocketAddr, oneshot::Sender<()>) {
    let listener = create_listener("127.0.0.1:0".parse().unwrap()).unwrap();
    let addr = listener.local_addr().unwrap();
    let state = Arc::new(AppState::with_root(site.path()));
    let (tx, rx) = oneshot::channel::<()>();
    tokio::spawn(start_server_loop(listener, state, async move {
        let _ = rx.await;
    }));
    (addr, tx)
}

async fn get(addr: SocketAddr, target: &str) -> RawResponse {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!("GET {target} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.unwrap();
    let raw = String::from_utf8(raw).unwrap();

    let (head, body) = raw.split_once("\r\n\r\n").unwrap();
    let mut lines = head.lines();
    let status = lines
        .next()
        .and_then(|l| l.split_whitespace().nth(1))
        .and_then(|s| s.parse().ok())
        .unwrap();
    let headers = lines
        .filter_map(|l| l.split_once(':'))
        .map(|(n, v)| (n.trim().to_string(), v.trim().to_string()))
        .collect();

    RawResponse {
        status,
        headers,
        body: body.to_string(),
    }
}

#[tokio::test]
async fn test_serves_site_over_tcp() {
    let site = Site::new("serve");
    let (addr, _shutdown) = start(&site).await;

    let index = get(addr, "/").await;
    assert_eq!(index.status, 200);
    assert_eq!(index.header("Content-Type"), Some("text/html"));
    assert_eq!(index.body, "<h1>hi</h1>");
    index.assert_isolation_headers();

    let css = get(addr, "/style.css?v=3").await;
    assert_eq!(css.status, 200);
    assert_eq!(css.header("Content-Type"), Some("text/css"));
    assert_eq!(css.body, "body{}");
    css.assert_isolation_headers();
}

#[tokio::test]
async fn test_missing_file_over_tcp() {
    let site = Site::new("missing");
    let (addr, _shutdown) = start(&site).await;

    let missing = get(addr, "/missing.png").await;
    assert_eq!(missing.status, 404);
    assert_eq!(missing.header("Content-Type"), Some("text/plain"));
    assert!(!missing.body.is_empty());
    missing.assert_isolation_headers();
}

#[tokio::test]
async fn test_diagnostic_over_tcp() {
    let site = Site::new("diag");
    let (addr, _shutdown) = start(&site).await;

    let diag = get(addr, "/test-headers").await;
    assert_eq!(diag.status, 200);
    assert_eq!(diag.header("Content-Type"), Some("application/json"));
    diag.assert_isolation_headers();

    let body: serde_json::Value = serde_json::from_str(&diag.body).unwrap();
    assert_eq!(body["message"], "Headers are being sent!");
    assert_eq!(body["headers"].as_object().unwrap().len(), 5);
    assert_eq!(body["headers"]["Cross-Origin-Embedder-Policy"], "credentialless");
}

#[tokio::test]
async fn test_shutdown_stops_accepting() {
    let site = Site::new("shutdown");
    let listener = create_listener("127.0.0.1:0".parse().unwrap()).unwrap();
    let state = Arc::new(AppState::with_root(site.path()));
    let (tx, rx) = oneshot::channel::<()>();
    let server = tokio::spawn(start_server_loop(listener, state, async move {
        let _ = rx.await;
    }));

    tx.send(()).unwrap();
    tokio::time::timeout(std::time::Duration::from_secs(5), server)
        .await
        .expect("server loop should stop after shutdown")
        .unwrap();
}
