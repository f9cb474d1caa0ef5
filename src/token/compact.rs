//! JWS compact serialization
//!
//! `BASE64URL(header) || '.' || BASE64URL(payload) || '.' || BASE64URL(signature)`
//! per [RFC 7515 Section 7.1](https://datatracker.ietf.org/doc/html/rfc7515#section-7.1).
//! The signing input is the first two segments exactly as they appear on the
//! wire; it is never rebuilt from re-serialized JSON.

use crate::error::{Error, Result};
use crate::utils::base64url;

/// Join raw header, payload and signature bytes into a compact token
pub fn compose(header: &[u8], payload: &[u8], signature: &[u8]) -> String {
    let signing_input = signing_input(
        &base64url::encode_bytes(header),
        &base64url::encode_bytes(payload),
    );
    append_signature(signing_input, signature)
}

/// Signing input: the header and payload segments joined by '.'
pub fn signing_input(header_b64: &str, payload_b64: &str) -> String {
    let mut input = String::with_capacity(header_b64.len() + payload_b64.len() + 1);
    input.push_str(header_b64);
    input.push('.');
    input.push_str(payload_b64);
    input
}

/// Complete a signing input with its encoded signature
pub(crate) fn append_signature(mut signing_input: String, signature: &[u8]) -> String {
    signing_input.push('.');
    signing_input.push_str(&base64url::encode_bytes(signature));
    signing_input
}

/// Split a compact token into its header, payload and signature segments
///
/// Fails unless there are exactly two '.' separators. Header and payload
/// segments must be non-empty; the signature segment may be empty, which
/// callers only accept for unsecured (`alg: none`) tokens.
pub fn split(token: &str) -> Result<(&str, &str, &str)> {
    let mut parts = token.split('.');
    let (Some(header_b64), Some(payload_b64), Some(signature_b64), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(Error::FormatInvalid(format!(
            "expected three parts separated by '.', found {}",
            token.split('.').count()
        )));
    };

    if header_b64.is_empty() {
        return Err(Error::FormatInvalid("header segment is empty".into()));
    }
    if payload_b64.is_empty() {
        return Err(Error::FormatInvalid("payload segment is empty".into()));
    }

    Ok((header_b64, payload_b64, signature_b64))
}
