//! Verify the builders against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file lists argument bags exactly as a script host would pass
//! them, along with the descriptor they must produce. Bodies are compared
//! as raw strings: key order and encoding are part of the contract.

use flood_core::{build_get, build_post, HttpMethod, HttpRequest, RequestArgs};

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        other => panic!("unknown method: {other}"),
    }
}

fn expected_headers(value: &serde_json::Value) -> Vec<(String, String)> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|h| {
            let arr = h.as_array().unwrap();
            (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
        })
        .collect()
}

fn check(name: &str, req: &HttpRequest, expected: &serde_json::Value) {
    assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
    assert_eq!(req.path, expected["path"].as_str().unwrap(), "{name}: path");
    assert_eq!(req.headers, expected_headers(&expected["headers"]), "{name}: headers");
    assert_eq!(req.body, expected["body"].as_str().unwrap(), "{name}: body");
}

// ---------------------------------------------------------------------------
// GET
// ---------------------------------------------------------------------------

#[test]
fn get_test_vectors() {
    let raw = include_str!("../../test-vectors/get.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let args: RequestArgs = serde_json::from_value(case["args"].clone()).unwrap();
        let req = build_get(&args);
        check(name, &req, &case["expected_request"]);
    }
}

// ---------------------------------------------------------------------------
// POST
// ---------------------------------------------------------------------------

#[test]
fn post_test_vectors() {
    let raw = include_str!("../../test-vectors/post.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let args: RequestArgs = serde_json::from_value(case["args"].clone()).unwrap();
        let req = build_post(&args).unwrap();
        check(name, &req, &case["expected_request"]);
    }
}
