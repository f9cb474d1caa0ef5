use crate::algorithm::AlgorithmId;
use crate::claims::ClaimSet;
use crate::error::{Error, Result};
use crate::limits::{MAX_ALG_LENGTH, MAX_KID_LENGTH};
use crate::utils::bounds::validate_field_size;

/// `alg` value of an unsecured token
pub(crate) const ALG_NONE: &str = "none";

/// JOSE header of a token
///
/// A claim set that is guaranteed to carry a string `alg` parameter. Any
/// other parameters (`typ`, `kid`, custom ones) are kept as-is and in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    algorithm: String,
    claims: ClaimSet,
}

impl Header {
    /// Header declaring only `alg`
    pub fn new(algorithm: &AlgorithmId) -> Self {
        Self {
            algorithm: algorithm.as_str().to_string(),
            claims: ClaimSet::new().with("alg", algorithm.as_str()),
        }
    }

    /// Wrap a claim set, checking it is a usable header
    pub fn from_claims(claims: ClaimSet) -> Result<Self> {
        let algorithm = match claims.get("alg") {
            None => return Err(Error::ClaimMissingField("alg".into())),
            Some(value) => value
                .as_str()
                .ok_or_else(|| Error::FormatInvalidSchema("header 'alg' must be a string".into()))?
                .to_string(),
        };
        validate_field_size("alg", &algorithm, MAX_ALG_LENGTH)?;

        if let Some(kid) = claims.get("kid") {
            let kid = kid
                .as_str()
                .ok_or_else(|| Error::FormatInvalidSchema("header 'kid' must be a string".into()))?;
            validate_field_size("kid", kid, MAX_KID_LENGTH)?;
        }

        Ok(Self { algorithm, claims })
    }

    /// Parse algorithm from header
    pub fn algorithm(&self) -> Result<AlgorithmId> {
        AlgorithmId::from_str(&self.algorithm)
    }

    /// Get algorithm as string
    pub fn algorithm_str(&self) -> &str {
        &self.algorithm
    }

    /// Whether the header declares the unsecured `none` algorithm
    pub fn is_unsigned(&self) -> bool {
        self.algorithm == ALG_NONE
    }

    /// Token type (typically "JWT")
    pub fn token_type(&self) -> Option<&str> {
        self.claims.get_str("typ")
    }

    /// Key ID (for key selection before verification)
    pub fn key_id(&self) -> Option<&str> {
        self.claims.get_str("kid")
    }

    /// All header parameters
    pub fn claims(&self) -> &ClaimSet {
        &self.claims
    }
}
