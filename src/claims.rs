//! Ordered claim sets for JWT headers and payloads
//!
//! A [`ClaimSet`] is a JSON object whose keys keep their insertion order, so
//! a set serializes to the same bytes every time it is encoded. Values are
//! [`serde_json::Value`], which covers every JSON scalar and container. Numbers
//! keep their original textual form, so large integers and the integer/float
//! distinction survive a parse/serialize round-trip.

use crate::error::{Error, Result};
use serde_json::{Map, Number, Value};

/// Ordered mapping of claim names to JSON values
///
/// Standard claims from [RFC 7519 Section 4.1](https://datatracker.ietf.org/doc/html/rfc7519#section-4.1)
/// have typed accessors; everything else is reachable through [`get`](Self::get).
///
/// # Examples
///
/// ```ignore
/// use jwtcodec::ClaimSet;
///
/// let claims = ClaimSet::new()
///     .with("sub", "11228")
///     .with("iss", "me")
///     .with("aud", "you");
///
/// assert_eq!(claims.subject(), Some("11228"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClaimSet {
    claims: Map<String, Value>,
}

impl ClaimSet {
    /// Create an empty claim set
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a claim set from UTF-8 JSON bytes
    ///
    /// Fails with `FormatInvalidJson` on malformed JSON and with
    /// `FormatInvalidSchema` if the top-level value is not an object.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes)
            .map_err(|e| Error::FormatInvalidJson(e.to_string()))?;

        match value {
            Value::Object(claims) => Ok(Self { claims }),
            other => Err(Error::FormatInvalidSchema(format!(
                "expected a JSON object, found {}",
                json_kind(&other)
            ))),
        }
    }

    /// Serialize to compact UTF-8 JSON, keys in insertion order
    pub fn serialize(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(&self.claims).map_err(|e| Error::FormatInvalidJson(e.to_string()))
    }

    /// Insert a claim, returning the previous value
    ///
    /// Replacing an existing claim keeps its original position.
    ///
    /// JSON has no NaN or infinity: `serde_json` turns a non-finite `f64` into
    /// `null` on conversion. Use [`insert_f64`](Self::insert_f64) to have such
    /// values rejected instead.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.claims.insert(name.into(), value.into())
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert a float claim, rejecting NaN and infinities
    ///
    /// Fails with `FormatInvalidSchema` for a value JSON cannot represent.
    pub fn insert_f64(&mut self, name: impl Into<String>, value: f64) -> Result<Option<Value>> {
        let name = name.into();
        let number = Number::from_f64(value).ok_or_else(|| {
            Error::FormatInvalidSchema(format!("claim '{name}' is not a finite number: {value}"))
        })?;
        Ok(self.insert(name, number))
    }

    /// Builder-style [`insert_f64`](Self::insert_f64)
    pub fn try_with_f64(mut self, name: impl Into<String>, value: f64) -> Result<Self> {
        self.insert_f64(name, value)?;
        Ok(self)
    }

    /// Remove a claim, preserving the order of the remaining claims
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.claims.shift_remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.claims.get(name)
    }

    /// Get a claim if it is a JSON string
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.claims.get(name).and_then(Value::as_str)
    }

    /// Get a claim if it is an integer that fits in `i64`
    pub fn get_i64(&self, name: &str) -> Option<i64> {
        self.claims.get(name).and_then(Value::as_i64)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.claims.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// Iterate claims in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.claims.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.claims.keys().map(String::as_str)
    }

    /// Borrow the underlying JSON object
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.claims
    }

    /// Issuer (iss) - identifies the principal that issued the JWT
    pub fn issuer(&self) -> Option<&str> {
        self.get_str("iss")
    }

    /// Subject (sub) - identifies the principal that is the subject of the JWT
    pub fn subject(&self) -> Option<&str> {
        self.get_str("sub")
    }

    /// Audience (aud) - accepts both the single-string and array forms
    pub fn audience(&self) -> Vec<&str> {
        match self.claims.get("aud") {
            Some(Value::String(aud)) => vec![aud.as_str()],
            Some(Value::Array(values)) => values.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// Expiration Time (exp) - seconds since Unix epoch
    pub fn expiration(&self) -> Option<i64> {
        self.get_i64("exp")
    }

    /// Not Before (nbf) - seconds since Unix epoch
    pub fn not_before(&self) -> Option<i64> {
        self.get_i64("nbf")
    }

    /// Issued At (iat) - seconds since Unix epoch
    pub fn issued_at(&self) -> Option<i64> {
        self.get_i64("iat")
    }

    /// JWT ID (jti) - unique identifier for the JWT
    pub fn jwt_id(&self) -> Option<&str> {
        self.get_str("jti")
    }
}

impl From<Map<String, Value>> for ClaimSet {
    fn from(claims: Map<String, Value>) -> Self {
        Self { claims }
    }
}

impl From<ClaimSet> for Value {
    fn from(set: ClaimSet) -> Self {
        Value::Object(set.claims)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ClaimSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            claims: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for ClaimSet {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.claims.into_iter()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
