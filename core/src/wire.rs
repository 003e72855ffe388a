//! Rendering of request descriptors into raw HTTP/1.1 bytes.
//!
//! # Design
//! A load generator writes the same request many times over pooled
//! connections, so the request is formatted once up front. The renderer owns
//! the connection-level headers (`Host`, `Connection`, `Content-Length`):
//! caller-supplied copies of those are dropped. `Accept`, `User-Agent`, and
//! `Content-Type` get defaults only when the descriptor carries none.

use bytes::{BufMut, Bytes, BytesMut};
use log::trace;

use crate::http::HttpRequest;

const MANAGED_HEADERS: [&str; 3] = ["Host", "Connection", "Content-Length"];

/// Settings for `render_request`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireOptions {
    /// Value of the `Host` header, e.g. `example.com:8080`.
    pub host: String,
    /// `User-Agent` sent when the request does not set one.
    pub user_agent: String,
    /// `Connection: keep-alive` when true, `Connection: close` otherwise.
    pub keep_alive: bool,
}

impl WireOptions {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Self::default()
        }
    }
}

impl Default for WireOptions {
    fn default() -> Self {
        Self {
            host: "127.0.0.1:8080".to_string(),
            user_agent: "flood".to_string(),
            keep_alive: true,
        }
    }
}

/// Format `req` as a complete HTTP/1.1 request.
pub fn render_request(req: &HttpRequest, options: &WireOptions) -> Bytes {
    let mut data = BytesMut::with_capacity(256 + req.body.len());
    put_str(&mut data, req.method.as_str());
    put_str(&mut data, " ");
    put_str(&mut data, &req.path);
    put_str(&mut data, " HTTP/1.1\r\n");
    put_header(&mut data, "Host", &options.host);
    let connection = if options.keep_alive { "keep-alive" } else { "close" };
    put_header(&mut data, "Connection", connection);

    let mut has_accept = false;
    let mut has_user_agent = false;
    let mut has_content_type = false;
    for (name, value) in &req.headers {
        if MANAGED_HEADERS.iter().any(|m| name.eq_ignore_ascii_case(m)) {
            continue;
        }
        has_accept |= name.eq_ignore_ascii_case("Accept");
        has_user_agent |= name.eq_ignore_ascii_case("User-Agent");
        has_content_type |= name.eq_ignore_ascii_case("Content-Type");
        put_header(&mut data, name, value);
    }

    if !has_accept {
        put_header(&mut data, "Accept", "*/*");
    }
    if !has_user_agent {
        put_header(&mut data, "User-Agent", &options.user_agent);
    }
    if !has_content_type {
        put_header(&mut data, "Content-Type", "text/plain");
    }
    put_header(&mut data, "Content-Length", &req.body.len().to_string());
    put_str(&mut data, "\r\n");
    put_str(&mut data, &req.body);

    trace!("rendered {} {} into {} bytes", req.method, req.path, data.len());
    data.freeze()
}

fn put_str(data: &mut BytesMut, s: &str) {
    data.put_slice(s.as_bytes());
}

fn put_header(data: &mut BytesMut, name: &str, value: &str) {
    put_str(data, name);
    put_str(data, ": ");
    put_str(data, value);
    put_str(data, "\r\n");
}
