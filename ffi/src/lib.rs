//! C-ABI wrapper around `flood-core`.
//!
//! # Overview
//! Exposes the random generators and the request builders through
//! `extern "C"` functions so a load driver written in any language with a
//! C FFI can produce request descriptors without linking serde or rand.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - Request arguments cross the boundary as a JSON C string, the same
//!   shape `RequestArgs::from_json_str` accepts. A null pointer means
//!   "all defaults".
//! - Build operations return an `FfiBuildResult` envelope carrying either
//!   an `FfiHttpRequest` or an error code and message.
//! - The C caller owns all returned pointers and must call the matching
//!   `flood_free_*` function to release them.

pub mod types;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::panic::catch_unwind;

use flood_core::{Error, RequestArgs};

use types::*;

// ---------------------------------------------------------------------------
// Random generators
// ---------------------------------------------------------------------------

/// Random string of `length` characters from a built-in alphabet.
///
/// `alphabet_id`: 0 digits, 1 lowercase, 2 uppercase, 3 alphabetic,
/// 4 alphanumeric. Returns null for an unknown id. A negative `length`
/// yields an empty string. Free with `flood_free_string`.
#[unsafe(no_mangle)]
pub extern "C" fn flood_random_string(alphabet_id: u32, length: i32) -> *mut c_char {
    catch_unwind(|| {
        let Some(alphabet) = alphabet_from_id(alphabet_id) else {
            return std::ptr::null_mut();
        };
        match flood_core::random_string(alphabet.as_str(), clamp_length(length)) {
            Ok(s) => into_c_string(s),
            Err(_) => std::ptr::null_mut(),
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Random string of `length` characters drawn from the UTF-8 string
/// `alphabet`.
///
/// Returns null if `alphabet` is null or not valid UTF-8, or if it is empty
/// and `length > 0`. A negative `length` yields an empty string.
#[unsafe(no_mangle)]
pub extern "C" fn flood_random_string_from(alphabet: *const c_char, length: i32) -> *mut c_char {
    catch_unwind(|| {
        if alphabet.is_null() {
            return std::ptr::null_mut();
        }
        let Ok(alphabet) = unsafe { CStr::from_ptr(alphabet) }.to_str() else {
            return std::ptr::null_mut();
        };
        match flood_core::random_string(alphabet, clamp_length(length)) {
            Ok(s) => into_c_string(s),
            Err(_) => std::ptr::null_mut(),
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Write a uniform integer in `[low, high)` to `out`.
///
/// Returns false (and leaves `out` untouched) if `out` is null or
/// `high <= low`.
#[unsafe(no_mangle)]
pub extern "C" fn flood_random_int(low: i64, high: i64, out: *mut i64) -> bool {
    catch_unwind(|| {
        if out.is_null() {
            return false;
        }
        match flood_core::random_int(low, high) {
            Ok(n) => {
                unsafe { *out = n };
                true
            }
            Err(_) => false,
        }
    })
    .unwrap_or(false)
}

// ---------------------------------------------------------------------------
// Build request functions
// ---------------------------------------------------------------------------

/// Build a GET descriptor from a JSON argument bag.
///
/// `args_json` may be null for default arguments. Free the result with
/// `flood_free_result`.
#[unsafe(no_mangle)]
pub extern "C" fn flood_build_get(args_json: *const c_char) -> *mut FfiBuildResult {
    catch_unwind(|| match parse_args(args_json) {
        Ok(args) => FfiBuildResult::ok(flood_core::build_get(&args)),
        Err(e) => FfiBuildResult::from_error(e),
    })
    .unwrap_or_else(|_| FfiBuildResult::panic("panic in flood_build_get"))
}

/// Build a POST descriptor from a JSON argument bag.
///
/// `args_json` may be null for default arguments. Free the result with
/// `flood_free_result`.
#[unsafe(no_mangle)]
pub extern "C" fn flood_build_post(args_json: *const c_char) -> *mut FfiBuildResult {
    catch_unwind(|| match parse_args(args_json).and_then(|args| flood_core::build_post(&args)) {
        Ok(req) => FfiBuildResult::ok(req),
        Err(e) => FfiBuildResult::from_error(e),
    })
    .unwrap_or_else(|_| FfiBuildResult::panic("panic in flood_build_post"))
}

fn parse_args(args_json: *const c_char) -> Result<RequestArgs, Error> {
    if args_json.is_null() {
        return Ok(RequestArgs::default());
    }
    let raw = unsafe { CStr::from_ptr(args_json) }
        .to_str()
        .map_err(|e| Error::Deserialization(e.to_string()))?;
    RequestArgs::from_json_str(raw)
}

fn clamp_length(length: i32) -> usize {
    usize::try_from(length).unwrap_or(0)
}

fn into_c_string(s: String) -> *mut c_char {
    CString::new(s)
        .map(CString::into_raw)
        .unwrap_or(std::ptr::null_mut())
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free an `FfiBuildResult` returned by `flood_build_get` or
/// `flood_build_post`, including the request it carries. Safe to call with
/// null.
#[unsafe(no_mangle)]
pub extern "C" fn flood_free_result(result: *mut FfiBuildResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let result = unsafe { Box::from_raw(result) };
        if !result.error_message.is_null() {
            drop(unsafe { CString::from_raw(result.error_message) });
        }
        if !result.request.is_null() {
            free_request(result.request);
        }
    });
}

fn free_request(req: *mut FfiHttpRequest) {
    let req = unsafe { Box::from_raw(req) };
    if !req.path.is_null() {
        drop(unsafe { CString::from_raw(req.path) });
    }
    if !req.body.is_null() {
        drop(unsafe { CString::from_raw(req.body) });
    }
    if !req.headers.is_null() && req.headers_len > 0 {
        let headers = unsafe {
            Box::from_raw(std::ptr::slice_from_raw_parts_mut(
                req.headers,
                req.headers_len as usize,
            ))
        };
        for h in headers.iter() {
            if !h.key.is_null() {
                drop(unsafe { CString::from_raw(h.key) });
            }
            if !h.value.is_null() {
                drop(unsafe { CString::from_raw(h.value) });
            }
        }
    }
}

/// Free a C string allocated by this library. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn flood_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { CString::from_raw(s) });
        });
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn c_str<'a>(ptr: *const c_char) -> &'a str {
        unsafe { CStr::from_ptr(ptr) }.to_str().unwrap()
    }

    fn headers_of(req: &FfiHttpRequest) -> Vec<(String, String)> {
        (0..req.headers_len as usize)
            .map(|i| {
                let h = unsafe { &*req.headers.add(i) };
                (c_str(h.key).to_string(), c_str(h.value).to_string())
            })
            .collect()
    }

    #[test]
    fn random_string_builtin_alphabets() {
        for (id, alphabet) in [
            (0, "0123456789"),
            (1, "abcdefghijklmnopqrstuvwxyz"),
            (2, "ABCDEFGHIJKLMNOPQRSTUVWXYZ"),
        ] {
            let s = flood_random_string(id, 32);
            assert!(!s.is_null());
            let text = c_str(s);
            assert_eq!(text.len(), 32);
            assert!(text.chars().all(|c| alphabet.contains(c)));
            flood_free_string(s);
        }
    }

    #[test]
    fn random_string_alphanumeric() {
        let s = flood_random_string(4, 16);
        assert!(c_str(s).chars().all(|c| c.is_ascii_alphanumeric()));
        flood_free_string(s);
    }

    #[test]
    fn random_string_unknown_alphabet_returns_null() {
        assert!(flood_random_string(99, 8).is_null());
    }

    #[test]
    fn random_string_negative_length_is_empty() {
        let s = flood_random_string(3, -5);
        assert!(!s.is_null());
        assert_eq!(c_str(s), "");
        flood_free_string(s);
    }

    #[test]
    fn random_string_from_custom_alphabet() {
        let alphabet = CString::new("ab€").unwrap();
        let s = flood_random_string_from(alphabet.as_ptr(), 20);
        let text = c_str(s);
        assert_eq!(text.chars().count(), 20);
        assert!(text.chars().all(|c| "ab€".contains(c)));
        flood_free_string(s);
    }

    #[test]
    fn random_string_from_null_or_empty_returns_null() {
        assert!(flood_random_string_from(std::ptr::null(), 4).is_null());
        let empty = CString::new("").unwrap();
        assert!(flood_random_string_from(empty.as_ptr(), 4).is_null());
        let s = flood_random_string_from(empty.as_ptr(), 0);
        assert_eq!(c_str(s), "");
        flood_free_string(s);
    }

    #[test]
    fn random_int_writes_value_in_range() {
        let mut out = 0i64;
        for _ in 0..100 {
            assert!(flood_random_int(10, 20, &mut out));
            assert!((10..20).contains(&out));
        }
    }

    #[test]
    fn random_int_rejects_empty_range_and_null_out() {
        let mut out = -1i64;
        assert!(!flood_random_int(5, 5, &mut out));
        assert_eq!(out, -1);
        assert!(!flood_random_int(0, 10, std::ptr::null_mut()));
    }

    #[test]
    fn build_get_null_args_uses_defaults() {
        let result = flood_build_get(std::ptr::null());
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::Ok);
        assert!(r.error_message.is_null());
        let req = unsafe { &*r.request };
        assert_eq!(req.method, FfiHttpMethod::Get);
        assert_eq!(c_str(req.path), "/");
        assert_eq!(c_str(req.body), "");
        assert_eq!(req.headers_len, 0);
        assert!(req.headers.is_null());
        flood_free_result(result);
    }

    #[test]
    fn build_get_with_query_and_headers() {
        let args = CString::new(r#"{"path":"/x","qs":{"a":"1","b":"2 "},"headers":{"X-A":"1"}}"#)
            .unwrap();
        let result = flood_build_get(args.as_ptr());
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::Ok);
        let req = unsafe { &*r.request };
        assert_eq!(c_str(req.path), "/x?a=1&b=2%20");
        assert_eq!(headers_of(req), vec![("X-A".to_string(), "1".to_string())]);
        flood_free_result(result);
    }

    #[test]
    fn build_post_json_body() {
        let args = CString::new(r#"{"json":{"x":1}}"#).unwrap();
        let result = flood_build_post(args.as_ptr());
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::Ok);
        let req = unsafe { &*r.request };
        assert_eq!(req.method, FfiHttpMethod::Post);
        assert_eq!(c_str(req.body), r#"{"x":1}"#);
        assert_eq!(
            headers_of(req),
            vec![("Content-Type".to_string(), "application/json".to_string())]
        );
        flood_free_result(result);
    }

    #[test]
    fn build_post_params_win_over_json() {
        let args = CString::new(r#"{"params":{"a":"1"},"json":{"a":1}}"#).unwrap();
        let result = flood_build_post(args.as_ptr());
        let req = unsafe { &*(*result).request };
        assert_eq!(c_str(req.body), "a=1");
        assert_eq!(
            headers_of(req),
            vec![(
                "Content-Type".to_string(),
                "application/x-www-form-urlencoded".to_string()
            )]
        );
        flood_free_result(result);
    }

    #[test]
    fn build_post_without_body() {
        let result = flood_build_post(std::ptr::null());
        let req = unsafe { &*(*result).request };
        assert_eq!(c_str(req.body), "");
        assert_eq!(req.headers_len, 0);
        flood_free_result(result);
    }

    #[test]
    fn build_with_malformed_args_reports_deserialization() {
        let args = CString::new("{not json").unwrap();
        for result in [flood_build_get(args.as_ptr()), flood_build_post(args.as_ptr())] {
            let r = unsafe { &*result };
            assert_eq!(r.error_code, FfiErrorCode::Deserialization);
            assert!(r.request.is_null());
            assert!(c_str(r.error_message).starts_with("deserialization failed"));
            flood_free_result(result);
        }
    }

    #[test]
    fn build_with_nul_in_path_reports_interior_nul() {
        let args = CString::new(r#"{"path":"/a\u0000b"}"#).unwrap();
        let result = flood_build_get(args.as_ptr());
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::InteriorNul);
        assert!(r.request.is_null());
        assert!(!r.error_message.is_null());
        flood_free_result(result);
    }

    #[test]
    fn free_functions_accept_null() {
        flood_free_result(std::ptr::null_mut());
        flood_free_string(std::ptr::null_mut());
    }
}
