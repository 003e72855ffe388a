//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Each type mirrors a core type but uses C-compatible representations:
//! `*mut c_char` instead of `String`, raw pointers instead of `Vec`, and
//! tagged enums with explicit discriminants. Conversion functions live here
//! to keep `lib.rs` focused on the `extern "C"` surface.

use std::ffi::CString;
use std::os::raw::c_char;

use flood_core::{Alphabet, Error, HttpMethod, HttpRequest};

/// Map a C alphabet id onto a built-in alphabet.
///
/// 0 digits, 1 lowercase, 2 uppercase, 3 alphabetic, 4 alphanumeric.
pub(crate) fn alphabet_from_id(id: u32) -> Option<Alphabet> {
    match id {
        0 => Some(Alphabet::Digits),
        1 => Some(Alphabet::Lowercase),
        2 => Some(Alphabet::Uppercase),
        3 => Some(Alphabet::Alphabetic),
        4 => Some(Alphabet::Alphanumeric),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// HTTP method as a C enum.
#[repr(C)]
#[derive(Debug, PartialEq, Eq)]
pub enum FfiHttpMethod {
    Get = 0,
    Post = 1,
}

impl From<HttpMethod> for FfiHttpMethod {
    fn from(m: HttpMethod) -> Self {
        match m {
            HttpMethod::Get => FfiHttpMethod::Get,
            HttpMethod::Post => FfiHttpMethod::Post,
        }
    }
}

/// A single HTTP header as a key-value pair of C strings.
#[repr(C)]
pub struct FfiHeader {
    pub key: *mut c_char,
    pub value: *mut c_char,
}

/// A request descriptor as C-compatible plain data.
///
/// `body` is never null; an empty body is an empty C string.
#[repr(C)]
pub struct FfiHttpRequest {
    pub method: FfiHttpMethod,
    pub path: *mut c_char,
    pub headers: *mut FfiHeader,
    pub headers_len: u32,
    pub body: *mut c_char,
}

impl FfiHttpRequest {
    /// Convert a core `HttpRequest` into a heap-allocated `FfiHttpRequest`.
    ///
    /// Fails if any string holds an interior NUL byte; nothing is leaked in
    /// that case.
    pub(crate) fn from_core(req: HttpRequest) -> Result<*mut Self, std::ffi::NulError> {
        let path = CString::new(req.path)?;
        let body = CString::new(req.body)?;
        let headers = req
            .headers
            .into_iter()
            .map(|(k, v)| Ok((CString::new(k)?, CString::new(v)?)))
            .collect::<Result<Vec<_>, std::ffi::NulError>>()?;

        let headers_len = headers.len() as u32;
        let headers = if headers.is_empty() {
            std::ptr::null_mut()
        } else {
            let ffi_headers: Box<[FfiHeader]> = headers
                .into_iter()
                .map(|(k, v)| FfiHeader {
                    key: k.into_raw(),
                    value: v.into_raw(),
                })
                .collect();
            Box::into_raw(ffi_headers) as *mut FfiHeader
        };

        let ffi_req = Box::new(FfiHttpRequest {
            method: req.method.into(),
            path: path.into_raw(),
            headers,
            headers_len,
            body: body.into_raw(),
        });
        Ok(Box::into_raw(ffi_req))
    }
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Error codes returned in `FfiBuildResult`.
#[repr(C)]
#[derive(Debug, PartialEq, Eq)]
pub enum FfiErrorCode {
    Ok = 0,
    Deserialization = 1,
    Serialization = 2,
    InteriorNul = 3,
    Panic = 4,
    InvalidRange = 5,
    EmptyAlphabet = 6,
}

/// Result envelope for the build operations.
///
/// On success `error_code` is `Ok`, `error_message` is null, and `request`
/// points to the descriptor. On failure `error_code` describes the
/// category, `error_message` is a human-readable C string, and `request`
/// is null.
#[repr(C)]
pub struct FfiBuildResult {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub request: *mut FfiHttpRequest,
}

impl FfiBuildResult {
    pub(crate) fn ok(req: HttpRequest) -> *mut Self {
        match FfiHttpRequest::from_core(req) {
            Ok(request) => Box::into_raw(Box::new(FfiBuildResult {
                error_code: FfiErrorCode::Ok,
                error_message: std::ptr::null_mut(),
                request,
            })),
            Err(e) => Self::failure(FfiErrorCode::InteriorNul, &e.to_string()),
        }
    }

    /// Build an error result from a core `Error`.
    pub(crate) fn from_error(err: Error) -> *mut Self {
        let code = match &err {
            Error::Serialization(_) => FfiErrorCode::Serialization,
            Error::Deserialization(_) => FfiErrorCode::Deserialization,
            Error::InvalidRange { .. } => FfiErrorCode::InvalidRange,
            Error::EmptyAlphabet => FfiErrorCode::EmptyAlphabet,
        };
        Self::failure(code, &err.to_string())
    }

    /// Build an error result for a caught panic.
    pub(crate) fn panic(msg: &str) -> *mut Self {
        Self::failure(FfiErrorCode::Panic, msg)
    }

    fn failure(error_code: FfiErrorCode, msg: &str) -> *mut Self {
        let msg = CString::new(msg.replace('\0', " ")).unwrap_or_default();
        Box::into_raw(Box::new(FfiBuildResult {
            error_code,
            error_message: msg.into_raw(),
            request: std::ptr::null_mut(),
        }))
    }
}
