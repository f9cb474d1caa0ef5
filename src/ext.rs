//! Convenience extension traits over the shared handler

use crate::error::Result;
use crate::handler::JwtHandler;
use crate::token::Token;

/// Compact serialization of a token
pub trait CompileToString {
    /// Re-emit the compact string
    fn compile_to_string(&self) -> String;
}

impl CompileToString for Token {
    fn compile_to_string(&self) -> String {
        self.compile()
    }
}

/// Decode a compact string with [`JwtHandler::shared`]
///
/// ```ignore
/// use jwtcodec::ToJwtToken;
///
/// let token = "eyJhbGciOiJIUzI1NiJ9.e30.c2ln".to_jwt_token()?;
/// ```
pub trait ToJwtToken {
    /// Decode without verifying the signature
    fn to_jwt_token(&self) -> Result<Token>;
}

impl ToJwtToken for str {
    fn to_jwt_token(&self) -> Result<Token> {
        JwtHandler::shared().decode(self)
    }
}

impl ToJwtToken for String {
    fn to_jwt_token(&self) -> Result<Token> {
        self.as_str().to_jwt_token()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claims::ClaimSet;
    use crate::error::Error;
    use crate::keys::SigningKey;

    #[test]
    fn test_string_round_trip() {
        let compact = JwtHandler::shared()
            .encode(
                &ClaimSet::new(),
                &ClaimSet::new().with("sub", "1"),
                &SigningKey::hs256("secret"),
            )
            .unwrap();

        let token = compact.to_jwt_token().unwrap();
        assert_eq!(token.compile_to_string(), compact);
        assert_eq!(compact.as_str().to_jwt_token().unwrap(), token);
    }

    #[test]
    fn test_malformed() {
        assert!(matches!(
            "abc.def".to_jwt_token(),
            Err(Error::FormatInvalid(_))
        ));
    }
}
