//! Request-generation helpers for HTTP load testing.
//!
//! # Overview
//! Builds `HttpRequest` descriptors from declarative `RequestArgs` and
//! produces randomized strings and integers to vary them. Nothing here
//! touches the network (host-does-IO pattern): the caller executes the
//! request, optionally after formatting it with `wire::render_request`.
//!
//! # Design
//! - Builders are free functions over borrowed args; there is no client
//!   state to carry between calls.
//! - Input is accepted permissively. The only failures are a JSON body that
//!   cannot be serialized and misuse of the random helpers.
//! - Ordered maps (`Params`, `Vec` headers) keep generated requests
//!   reproducible.
//! - Randomness is non-cryptographic; every helper has a `*_with` variant
//!   that takes a seeded `Rng`.

pub mod error;
pub mod http;
pub mod query;
pub mod random;
pub mod request;
pub mod types;
pub mod wire;

pub use error::{Error, Result};
pub use http::{HttpMethod, HttpRequest};
pub use random::{
    random_alphanumeric, random_digits, random_int, random_int_with, random_letters,
    random_lowercase, random_string, random_string_with, random_uppercase, Alphabet,
};
pub use request::{build_get, build_post};
pub use types::{Params, RequestArgs};
pub use wire::{render_request, WireOptions};
