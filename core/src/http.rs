//! HTTP request descriptor for the host-does-IO pattern.
//!
//! # Design
//! `HttpRequest` describes a request as plain data. The core crate builds
//! these values without touching the network; the caller (host) owns the
//! transport. Fields use owned types (`String`, `Vec`) so values can cross
//! the FFI boundary without lifetime concerns.

use std::fmt;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
pub const APPLICATION_JSON: &str = "application/json";

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data.
///
/// Built by `build_get` / `build_post`. `path` is a relative reference
/// (path plus optional query, no scheme or host). `headers` keeps the order
/// the caller supplied them in, with `Content-Type` appended when a body
/// was produced. `body` is empty when there is nothing to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpRequest {
    /// Value of the first header named exactly `name`.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}
