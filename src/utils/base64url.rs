//! Base64URL encoding/decoding per RFC 4648
//!
//! This module provides a thin wrapper around the `base64` crate. Output never
//! carries `=` padding; input is accepted with or without it.

use crate::error::{Error, Result};
use base64::{
    alphabet,
    engine::{general_purpose::URL_SAFE_NO_PAD, DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine,
};

/// URL-safe engine that tolerates optional padding but still rejects
/// non-zero trailing bits in the final symbol.
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encode bytes to Base64URL string
pub fn encode_bytes(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Encode string to Base64URL
pub fn encode(input: &str) -> String {
    encode_bytes(input.as_bytes())
}

/// Decode Base64URL string to bytes
pub fn decode_bytes(input: &str) -> Result<Vec<u8>> {
    URL_SAFE_LENIENT
        .decode(input)
        .map_err(|e| Error::FormatInvalidBase64(format!("Base64URL decode failed: {e}")))
}

/// Number of bytes a Base64URL string decodes to, padding ignored
///
/// Exact for valid input; lets callers bound a segment before decoding it.
pub fn decoded_len(input: &str) -> usize {
    let symbols = input.trim_end_matches('=').len();
    symbols / 4 * 3 + symbols % 4 * 3 / 4
}

/// Decode Base64URL string to UTF-8 string
pub fn decode(input: &str) -> Result<String> {
    let bytes = decode_bytes(input)?;
    String::from_utf8(bytes).map_err(|e| Error::FormatInvalidBase64(format!("Invalid UTF-8: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_roundtrip() {
        let tests = vec![
            "",
            "f",
            "fo",
            "foo",
            "foob",
            "fooba",
            "foobar",
            "Hello, World!",
            "The quick brown fox jumps over the lazy dog",
        ];

        for test in tests {
            let encoded = encode(test);
            let decoded = decode(&encoded).unwrap();
            assert_eq!(test, decoded, "Roundtrip failed for: {}", test);
        }
    }

    #[test]
    fn test_roundtrip_all_byte_values() {
        let bytes: Vec<u8> = (0..=255).collect();
        for len in 0..bytes.len() {
            let encoded = encode_bytes(&bytes[..len]);
            assert_eq!(decode_bytes(&encoded).unwrap(), &bytes[..len]);
        }
    }

    #[test]
    fn test_encode_bytes() {
        assert_eq!(encode_bytes(b""), "");
        assert_eq!(encode_bytes(b"f"), "Zg");
        assert_eq!(encode_bytes(b"fo"), "Zm8");
        assert_eq!(encode_bytes(b"foo"), "Zm9v");
        assert_eq!(encode_bytes(b"foob"), "Zm9vYg");
        assert_eq!(encode_bytes(b"fooba"), "Zm9vYmE");
        assert_eq!(encode_bytes(b"foobar"), "Zm9vYmFy");
    }

    #[test]
    fn test_accepts_padded_input() {
        assert_eq!(decode_bytes("Zg==").unwrap(), b"f");
        assert_eq!(decode_bytes("Zm8=").unwrap(), b"fo");
        assert_eq!(decode_bytes("Zg").unwrap(), b"f");
    }

    #[test]
    fn test_decode_invalid() {
        assert!(matches!(
            decode_bytes("!!!"),
            Err(Error::FormatInvalidBase64(_))
        ));
        // Standard alphabet characters are outside the URL-safe alphabet
        assert!(decode_bytes("a+b/").is_err());
        // A single dangling symbol cannot carry a whole byte
        assert!(decode_bytes("A").is_err());
        assert!(decode_bytes("Zm9vY").is_err());
        // Non-zero trailing bits
        assert!(decode_bytes("Zh").is_err());
    }

    #[test]
    fn test_decoded_len() {
        for len in 0..64 {
            let bytes = vec![0xa5; len];
            let encoded = encode_bytes(&bytes);
            assert_eq!(decoded_len(&encoded), len);
        }
        assert_eq!(decoded_len("Zg=="), 1);
        assert_eq!(decoded_len("Zm8="), 2);
    }

    #[test]
    fn test_url_safe_characters() {
        // Base64URL uses - and _ instead of + and /
        let bytes = vec![0xfb, 0xff];
        let encoded = encode_bytes(&bytes);
        assert!(encoded.contains('-') || encoded.contains('_'));
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));
        assert!(!encoded.contains('='));
    }
}
