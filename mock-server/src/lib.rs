use axum::{
    extract::Query,
    http::{header, HeaderMap, Method, Uri},
    routing::any,
    Json, Router,
};
use log::debug;
use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// Everything the server saw, reflected back as JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Echo {
    pub method: String,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub content_type: Option<String>,
    pub body: String,
    /// Decoded pairs when the body is `application/x-www-form-urlencoded`.
    pub form: Option<Vec<(String, String)>>,
    /// Parsed body when it is `application/json` and well-formed.
    pub json: Option<serde_json::Value>,
}

pub fn app() -> Router {
    Router::new()
        .route("/", any(echo))
        .route("/{*rest}", any(echo))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn echo(
    method: Method,
    uri: Uri,
    Query(query): Query<Vec<(String, String)>>,
    headers: HeaderMap,
    body: String,
) -> Json<Echo> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let form = match content_type.as_deref() {
        Some("application/x-www-form-urlencoded") => Some(decode_pairs(&body)),
        _ => None,
    };
    let json = match content_type.as_deref() {
        Some("application/json") => serde_json::from_str(&body).ok(),
        _ => None,
    };

    debug!("echo {method} {uri} ({} byte body)", body.len());
    Json(Echo {
        method: method.to_string(),
        path: uri.path().to_string(),
        query,
        content_type,
        body,
        form,
        json,
    })
}

/// Decode `k=v&k2=v2`, treating `+` as a space the way form parsers do.
pub fn decode_pairs(input: &str) -> Vec<(String, String)> {
    input
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(k), decode(v))
        })
        .collect()
}

fn decode(s: &str) -> String {
    percent_decode_str(&s.replace('+', " "))
        .decode_utf8_lossy()
        .into_owned()
}
