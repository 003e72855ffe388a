//! Input types for the request builders.
//!
//! # Design
//! `RequestArgs` is the declarative argument bag a load script hands over:
//! every field is optional and paired with a default in `request.rs`. It
//! deserializes straight from a JSON object so scripted hosts (and the FFI
//! layer) can pass loosely-typed arguments without a schema of their own.
//!
//! `Params` keeps insertion order so generated query strings, form bodies,
//! and header lists are reproducible from one run to the next.

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// Insertion-ordered string-to-string map.
///
/// Inserting an existing key replaces its value in place; the key keeps its
/// original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<(String, String)> {
        self.0
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

impl Serialize for Params {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for Params {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(ParamsVisitor)
    }
}

struct ParamsVisitor;

impl<'de> Visitor<'de> for ParamsVisitor {
    type Value = Params;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object of string, number, or boolean values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Params, A::Error> {
        let mut params = Params::new();
        while let Some((key, value)) = access.next_entry::<String, ScalarString>()? {
            params.insert(key, value.0);
        }
        Ok(params)
    }
}

/// A map value coerced to its string form, the way a script host would
/// stringify it before encoding.
struct ScalarString(String);

impl<'de> Deserialize<'de> for ScalarString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(ScalarVisitor)
    }
}

struct ScalarVisitor;

impl<'de> Visitor<'de> for ScalarVisitor {
    type Value = ScalarString;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number, or boolean")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<ScalarString, E> {
        Ok(ScalarString(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<ScalarString, E> {
        Ok(ScalarString(v))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<ScalarString, E> {
        Ok(ScalarString(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<ScalarString, E> {
        Ok(ScalarString(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<ScalarString, E> {
        Ok(ScalarString(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<ScalarString, E> {
        Ok(ScalarString(v.to_string()))
    }
}

/// Declarative description of a request. Absent fields take the defaults
/// documented on `build_get` / `build_post`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<Params>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qs: Option<Params>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Params>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json: Option<serde_json::Value>,
}

impl RequestArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON argument bag such as
    /// `{"path": "/search", "qs": {"q": "rust"}}`.
    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| Error::Deserialization(e.to_string()))
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.get_or_insert_with(Params::new).insert(name, value);
        self
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.qs.get_or_insert_with(Params::new).insert(key, value);
        self
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.get_or_insert_with(Params::new).insert(key, value);
        self
    }

    /// Set the JSON body. Fails if `value` cannot be represented as JSON,
    /// e.g. a map with non-string keys.
    pub fn with_json<T: Serialize + ?Sized>(mut self, value: &T) -> Result<Self> {
        let value =
            serde_json::to_value(value).map_err(|e| Error::Serialization(e.to_string()))?;
        self.json = Some(value);
        Ok(self)
    }
}
