//! Minimal HTTP/1.1 server for remote-resolver integration tests.
//!
//! Routes (by path prefix):
//! - `/oembed`        GET → oEmbed JSON whose html embeds `<base>player/1`
//! - `/oembed-broken` GET → 200 with a body that is not JSON
//! - `/short/`        HEAD/GET → 302 to `/landing`
//! - `/head-blocked/` HEAD → 405; GET → 302 to `/landing`
//! - `/large-head-blocked/` HEAD → 405; GET → 302 to `/large`
//! - `/landing`       → 200
//! - `/large`         → 200 with a 512 KiB page
//! - `/slow`          → 200 after a 2 s delay
//! - anything else    → 404

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

/// Larger than the transport's body cap.
pub const LARGE_BODY_BYTES: usize = 512 * 1024;

/// Starts the server in a background thread. Returns the base URL
/// (e.g. "http://127.0.0.1:12345/"). The server runs until the process exits.
pub fn start() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let base = format!("http://127.0.0.1:{}/", port);
    let served_base = base.clone();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let base = served_base.clone();
            thread::spawn(move || handle(stream, &base));
        }
    });
    base
}

fn handle(mut stream: TcpStream, base: &str) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let mut parts = request.lines().next().unwrap_or("").split_whitespace();
    let method = parts.next().unwrap_or("");
    let path = parts.next().unwrap_or("/");
    let is_head = method.eq_ignore_ascii_case("HEAD");

    let (status, location, body) = route(method, path, base);
    let mut response = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n",
        status,
        body.len()
    );
    if let Some(location) = location {
        response.push_str(&format!("Location: {}\r\n", location));
    }
    if path.starts_with("/oembed") {
        response.push_str("Content-Type: application/json\r\n");
    }
    response.push_str("\r\n");
    let _ = stream.write_all(response.as_bytes());
    if !is_head {
        let _ = stream.write_all(body.as_bytes());
    }
}

fn route(method: &str, path: &str, base: &str) -> (&'static str, Option<String>, String) {
    let landing = format!("{}landing", base);
    if path.starts_with("/oembed-broken") {
        return ("200 OK", None, "<html>not json</html>".to_string());
    }
    if path.starts_with("/oembed") {
        let html = format!(
            "<iframe width=\\\"100%\\\" src=\\\"{}player/1?visual=true\\\"></iframe>",
            base
        );
        let body = format!(
            "{{\"version\":\"1.0\",\"type\":\"rich\",\"provider_name\":\"Local\",\"html\":\"{}\"}}",
            html
        );
        return ("200 OK", None, body);
    }
    if path.starts_with("/short/") {
        return ("302 Found", Some(landing), String::new());
    }
    if path.starts_with("/large-head-blocked/") {
        if method.eq_ignore_ascii_case("HEAD") {
            return ("405 Method Not Allowed", None, String::new());
        }
        return ("302 Found", Some(format!("{}large", base)), String::new());
    }
    if path.starts_with("/large") {
        return ("200 OK", None, "x".repeat(LARGE_BODY_BYTES));
    }
    if path.starts_with("/head-blocked/") {
        if method.eq_ignore_ascii_case("HEAD") {
            return ("405 Method Not Allowed", None, String::new());
        }
        return ("302 Found", Some(landing), String::new());
    }
    if path.starts_with("/landing") {
        return ("200 OK", None, "landed".to_string());
    }
    if path.starts_with("/slow") {
        thread::sleep(Duration::from_secs(2));
        return ("200 OK", None, "{}".to_string());
    }
    ("404 Not Found", None, String::new())
}
