//! Decoded JWT token
//!
//! A [`Token`] keeps the three raw Base64URL segments it was built from next to
//! their decoded forms. Verification always signs over the stored segments, so a
//! token never has to be re-serialized to be checked, and [`Token::compile`]
//! reproduces the original compact string byte for byte.

use crate::claims::ClaimSet;
use crate::token::compact;
use crate::token::Header;

/// A JWT in JWS compact serialization, decoded but not verified
///
/// Obtained from [`JwtHandler::decode`](crate::JwtHandler::decode) or
/// [`JwtHandler::encode_token`](crate::JwtHandler::encode_token). Holding a
/// `Token` says nothing about its signature; pass it to
/// [`JwtHandler::verify`](crate::JwtHandler::verify) before trusting its claims.
///
/// # Examples
///
/// ```ignore
/// use jwtcodec::*;
///
/// let token = JwtHandler::shared().decode(token_str)?;
/// println!("alg: {}", token.header().algorithm_str());
/// println!("sub: {:?}", token.claims().subject());
/// assert_eq!(token.compile(), token_str);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    header_b64: String,
    payload_b64: String,
    signature_b64: String,
    signature: Vec<u8>,
    header: Header,
    claims: ClaimSet,
}

impl Token {
    pub(crate) fn from_parts(
        header_b64: impl Into<String>,
        payload_b64: impl Into<String>,
        signature_b64: impl Into<String>,
        signature: Vec<u8>,
        header: Header,
        claims: ClaimSet,
    ) -> Self {
        Self {
            header_b64: header_b64.into(),
            payload_b64: payload_b64.into(),
            signature_b64: signature_b64.into(),
            signature,
            header,
            claims,
        }
    }

    /// Get the token header
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Get the payload claims
    pub fn claims(&self) -> &ClaimSet {
        &self.claims
    }

    /// Alias for [`claims`](Self::claims)
    pub fn payload(&self) -> &ClaimSet {
        &self.claims
    }

    /// Get the decoded signature bytes (empty for unsecured tokens)
    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    /// Get the raw header segment
    pub fn header_b64(&self) -> &str {
        &self.header_b64
    }

    /// Get the raw payload segment
    pub fn payload_b64(&self) -> &str {
        &self.payload_b64
    }

    /// Get the raw signature segment
    pub fn signature_b64(&self) -> &str {
        &self.signature_b64
    }

    /// Bytes covered by the signature: `header_b64 '.' payload_b64`
    pub fn signing_input(&self) -> String {
        compact::signing_input(&self.header_b64, &self.payload_b64)
    }

    /// Re-emit the compact serialization from the stored segments
    pub fn compile(&self) -> String {
        let mut out = self.signing_input();
        out.reserve(self.signature_b64.len() + 1);
        out.push('.');
        out.push_str(&self.signature_b64);
        out
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.compile())
    }
}
