use crate::algorithm::AlgorithmId;
use crate::error::{Error, Result};
use crate::keys::Key;

/// Core algorithm trait that all JWS signature algorithms implement
///
/// Different algorithm families (HMAC, RSA, ECDSA) implement this trait.
/// Signing input and signature are raw bytes; Base64URL handling belongs to
/// the token codec.
pub trait Algorithm: Send + Sync {
    /// The algorithm identifier
    fn id(&self) -> AlgorithmId;

    /// Produce a signature over `signing_input`
    fn sign(&self, signing_input: &[u8], key: &Key) -> Result<Vec<u8>>;

    /// Check a signature over `signing_input`
    ///
    /// Returns `Ok(false)` when the signature does not match. Errors are
    /// reserved for keys that cannot serve this algorithm at all.
    fn verify(&self, signing_input: &[u8], signature: &[u8], key: &Key) -> Result<bool>;
}

/// Get the built-in implementation for the given algorithm ID
///
/// Fails with `AlgorithmUnsupported` for custom algorithms.
pub fn get_algorithm(algorithm: &AlgorithmId) -> Result<&'static dyn Algorithm> {
    Ok(match algorithm {
        AlgorithmId::HS256 => &super::hmac::HS256,
        AlgorithmId::HS384 => &super::hmac::HS384,
        AlgorithmId::HS512 => &super::hmac::HS512,

        #[cfg(feature = "rsa")]
        AlgorithmId::RS256 => &super::rsa::RS256,
        #[cfg(feature = "rsa")]
        AlgorithmId::RS384 => &super::rsa::RS384,
        #[cfg(feature = "rsa")]
        AlgorithmId::RS512 => &super::rsa::RS512,

        #[cfg(feature = "ecdsa")]
        AlgorithmId::ES256 => &super::ecdsa::ES256,
        #[cfg(feature = "ecdsa")]
        AlgorithmId::ES384 => &super::ecdsa::ES384,

        AlgorithmId::Custom(custom) => {
            return Err(Error::AlgorithmUnsupported(format!(
                "{} has no built-in implementation",
                custom.name()
            )))
        }
    })
}
