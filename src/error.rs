//! Errors for jwtcodec

use thiserror::Error;

/// JWT codec errors
///
/// Every fallible operation reports one of these synchronously to its caller.
/// A signature that merely fails to match is not an error: `verify` reports it
/// as `Ok(false)`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Token too large: {size} bytes (maximum: {max} bytes)")]
    TokenTooLarge { size: usize, max: usize },

    #[error("Token {segment} too large: {size} bytes (maximum: {max} bytes)")]
    SegmentTooLarge {
        segment: String,
        size: usize,
        max: usize,
    },

    // ============================================================================
    // Format Errors
    // ============================================================================
    #[error("Invalid JWT format: {0}")]
    FormatInvalid(String),

    #[error("Base64URL decoding failed: {0}")]
    FormatInvalidBase64(String),

    #[error("JSON parsing failed: {0}")]
    FormatInvalidJson(String),

    #[error("Unexpected JSON structure: {0}")]
    FormatInvalidSchema(String),

    #[error("Missing required field: {0}")]
    ClaimMissingField(String),

    #[error("Header field '{field}' too long: {length} bytes (maximum: {max} bytes)")]
    HeaderFieldTooLong {
        field: String,
        length: usize,
        max: usize,
    },

    // ============================================================================
    // Algorithm Errors
    // ============================================================================
    #[error("Algorithm '{0}' is not supported or not enabled")]
    AlgorithmUnsupported(String),

    #[error("The 'none' algorithm is rejected for security reasons (RFC 8725)")]
    AlgorithmNoneRejected,

    // ============================================================================
    // Key Errors
    // ============================================================================
    #[error(
        "Key type mismatch for algorithm '{algorithm}': expected {expected_key_type}, got {actual_key_type}"
    )]
    KeyTypeMismatch {
        algorithm: String,
        expected_key_type: String,
        actual_key_type: String,
    },

    #[error("Key rejected: {0}")]
    KeyInvalid(String),

    #[error("Signing failed: {0}")]
    SigningFailed(String),
}

/// Result type alias for jwtcodec operations
pub type Result<T> = std::result::Result<T, Error>;
