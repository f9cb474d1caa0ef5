mod traits;

pub mod hmac;

#[cfg(feature = "rsa")]
pub mod rsa;

#[cfg(feature = "ecdsa")]
pub mod ecdsa;

pub use traits::{get_algorithm, Algorithm};

use crate::error::{Error, Result};
use crate::limits::MAX_ALG_LENGTH;

/// Algorithm identifier carried in the `alg` header parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmId {
    /// HMAC with SHA-256
    HS256,

    /// HMAC with SHA-384
    HS384,

    /// HMAC with SHA-512
    HS512,

    /// RSA PKCS#1 v1.5 with SHA-256
    #[cfg(feature = "rsa")]
    RS256,

    /// RSA PKCS#1 v1.5 with SHA-384
    #[cfg(feature = "rsa")]
    RS384,

    /// RSA PKCS#1 v1.5 with SHA-512
    #[cfg(feature = "rsa")]
    RS512,

    /// ECDSA with P-256 and SHA-256
    #[cfg(feature = "ecdsa")]
    ES256,

    /// ECDSA with P-384 and SHA-384
    #[cfg(feature = "ecdsa")]
    ES384,

    /// Algorithm served by a caller-provided [`Signer`](crate::Signer)
    ///
    /// Built with [`AlgorithmId::custom`]; the built-in signer rejects it.
    Custom(CustomAlgorithm),
}

/// Name of an algorithm this crate does not implement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CustomAlgorithm {
    name: &'static str,
}

impl CustomAlgorithm {
    /// The `alg` header value
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl AlgorithmId {
    /// Parse algorithm string from a token header
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        if s.len() > MAX_ALG_LENGTH {
            return Err(Error::AlgorithmUnsupported(format!(
                "Algorithm string too long: {} bytes (maximum: {} bytes)",
                s.len(),
                MAX_ALG_LENGTH
            )));
        }

        match s {
            "none" => Err(Error::AlgorithmNoneRejected),

            "HS256" => Ok(AlgorithmId::HS256),
            "HS384" => Ok(AlgorithmId::HS384),
            "HS512" => Ok(AlgorithmId::HS512),

            #[cfg(feature = "rsa")]
            "RS256" => Ok(AlgorithmId::RS256),
            #[cfg(feature = "rsa")]
            "RS384" => Ok(AlgorithmId::RS384),
            #[cfg(feature = "rsa")]
            "RS512" => Ok(AlgorithmId::RS512),

            #[cfg(feature = "ecdsa")]
            "ES256" => Ok(AlgorithmId::ES256),
            #[cfg(feature = "ecdsa")]
            "ES384" => Ok(AlgorithmId::ES384),

            _ => Err(Error::AlgorithmUnsupported(s.to_string())),
        }
    }

    /// Identify an algorithm by its `alg` name, for use with a custom signer
    ///
    /// Names of built-in algorithms resolve to their built-in variant.
    ///
    /// # Errors
    ///
    /// - `AlgorithmUnsupported` for an empty or over-long name
    /// - `AlgorithmNoneRejected` for `none`
    pub fn custom(name: &'static str) -> Result<Self> {
        match Self::from_str(name) {
            Err(Error::AlgorithmUnsupported(_)) if !name.is_empty() && name.len() <= MAX_ALG_LENGTH => {
                Ok(AlgorithmId::Custom(CustomAlgorithm { name }))
            }
            Err(Error::AlgorithmUnsupported(_)) => Err(Error::AlgorithmUnsupported(format!(
                "Invalid algorithm name: {} bytes (expected 1 to {} bytes)",
                name.len(),
                MAX_ALG_LENGTH
            ))),
            other => other,
        }
    }

    /// Convert to string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            AlgorithmId::HS256 => "HS256",
            AlgorithmId::HS384 => "HS384",
            AlgorithmId::HS512 => "HS512",

            #[cfg(feature = "rsa")]
            AlgorithmId::RS256 => "RS256",
            #[cfg(feature = "rsa")]
            AlgorithmId::RS384 => "RS384",
            #[cfg(feature = "rsa")]
            AlgorithmId::RS512 => "RS512",

            #[cfg(feature = "ecdsa")]
            AlgorithmId::ES256 => "ES256",
            #[cfg(feature = "ecdsa")]
            AlgorithmId::ES384 => "ES384",

            AlgorithmId::Custom(custom) => custom.name,
        }
    }

    /// Check if algorithm is HMAC-based (symmetric)
    pub fn is_symmetric(&self) -> bool {
        matches!(
            self,
            AlgorithmId::HS256 | AlgorithmId::HS384 | AlgorithmId::HS512
        )
    }

    /// Check if algorithm is asymmetric (RSA/ECDSA)
    ///
    /// Custom algorithms are neither symmetric nor asymmetric here.
    pub fn is_asymmetric(&self) -> bool {
        !self.is_symmetric() && !self.is_custom()
    }

    /// Check if algorithm is served by a caller-provided signer
    pub fn is_custom(&self) -> bool {
        matches!(self, AlgorithmId::Custom(_))
    }
}

impl std::fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl AsRef<str> for AlgorithmId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
