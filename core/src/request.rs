//! Stateless request-descriptor builders.
//!
//! # Design
//! `build_get` and `build_post` turn a `RequestArgs` bag into an
//! `HttpRequest` without touching the network. They never reject input:
//! absent fields fall back to defaults (`path` is `/`, headers are empty,
//! body is empty). The caller's arguments are borrowed immutably; headers
//! are copied, so adding `Content-Type` never leaks back into `args`.

use log::debug;

use crate::error::{Error, Result};
use crate::http::{HttpMethod, HttpRequest, APPLICATION_JSON, CONTENT_TYPE, FORM_URLENCODED};
use crate::query;
use crate::types::{Params, RequestArgs};

/// Build a GET descriptor. The body is always empty.
pub fn build_get(args: &RequestArgs) -> HttpRequest {
    let req = HttpRequest {
        method: HttpMethod::Get,
        path: target_path(args),
        headers: base_headers(args).into_vec(),
        body: String::new(),
    };
    debug!("built {} {}", req.method, req.path);
    req
}

/// Build a POST descriptor.
///
/// `params` wins over `json` when both are set. With neither, the body is
/// empty and no `Content-Type` is added. The query string from `qs` is
/// applied independently of the body.
pub fn build_post(args: &RequestArgs) -> Result<HttpRequest> {
    let mut headers = base_headers(args);
    let mut body = String::new();

    // JSON `null` counts as absent, matching what deserialization produces.
    let json = args.json.as_ref().filter(|v| !v.is_null());
    if let Some(params) = &args.params {
        headers.insert(CONTENT_TYPE, FORM_URLENCODED);
        body = query::encode(params);
    } else if let Some(json) = json {
        headers.insert(CONTENT_TYPE, APPLICATION_JSON);
        body = serde_json::to_string(json).map_err(|e| Error::Serialization(e.to_string()))?;
    }

    let req = HttpRequest {
        method: HttpMethod::Post,
        path: target_path(args),
        headers: headers.into_vec(),
        body,
    };
    debug!("built {} {} ({} byte body)", req.method, req.path, req.body.len());
    Ok(req)
}

fn target_path(args: &RequestArgs) -> String {
    let path = args.path.as_deref().unwrap_or("/");
    match &args.qs {
        Some(qs) => format!("{path}?{}", query::encode(qs)),
        None => path.to_string(),
    }
}

fn base_headers(args: &RequestArgs) -> Params {
    args.headers.clone().unwrap_or_default()
}
