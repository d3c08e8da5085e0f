// Startup banner

use std::fmt::Write;
use std::net::SocketAddr;

const INNER_WIDTH: usize = 63;

fn boxed_line(out: &mut String, text: &str) {
    let _ = writeln!(out, "║  {text:<width$}║", width = INNER_WIDTH - 2);
}

fn rule(out: &mut String, left: char, right: char) {
    let _ = writeln!(out, "{left}{}{right}", "═".repeat(INNER_WIDTH));
}

/// Banner with the listen URL, the isolation headers and browser hints
pub fn render_banner(addr: &SocketAddr) -> String {
    let url = format!("http://{addr}");
    let mut out = String::from("\n");

    rule(&mut out, '╔', '╗');
    boxed_line(&mut out, "       CROSS-ORIGIN ISOLATED DEV SERVER");
    rule(&mut out, '╠', '╣');
    boxed_line(&mut out, "");
    boxed_line(&mut out, &format!("Server running at: {url}"));
    boxed_line(&mut out, "");
    boxed_line(&mut out, "Headers being sent:");
    boxed_line(&mut out, "✓ Cross-Origin-Opener-Policy: same-origin");
    boxed_line(&mut out, "✓ Cross-Origin-Embedder-Policy: credentialless");
    boxed_line(&mut out, "");
    boxed_line(&mut out, "IMPORTANT:");
    boxed_line(&mut out, &format!("1. Use {url} (not localhost)"));
    boxed_line(&mut out, "2. Hard refresh: Ctrl+Shift+R (or Cmd+Shift+R on Mac)");
    boxed_line(&mut out, "3. Or try incognito/private browsing mode");
    boxed_line(&mut out, "");
    boxed_line(&mut out, &format!("Test headers: {url}/test-headers"));
    boxed_line(&mut out, "");
    rule(&mut out, '╚', '╝');

    out
}
