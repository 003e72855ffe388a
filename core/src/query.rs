//! Query-string and form-body encoding.
//!
//! Both the `?qs` suffix and `application/x-www-form-urlencoded` bodies use
//! the same routine: `key=value` pairs joined by `&`, each side escaped with
//! URI-component rules (spaces become `%20`, never `+`).

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::types::Params;

/// Characters left unescaped by URI-component encoding.
const URI_COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a single key or value.
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT_SET).to_string()
}

/// Encode `params` as `k1=v1&k2=v2`, in insertion order.
pub fn encode(params: &Params) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", encode_component(k), encode_component(v)))
        .collect::<Vec<_>>()
        .join("&")
}
