//! Token facade
//!
//! [`JwtHandler`] is the entry point for producing and consuming tokens. It is
//! an immutable value: configuration plus a shared [`Signer`]. Build one and
//! share it (or use [`JwtHandler::shared`]) instead of constructing a handler
//! per call.

use std::sync::Arc;

use once_cell::sync::Lazy;
use tracing::{debug, trace};

use crate::claims::ClaimSet;
use crate::error::{Error, Result};
use crate::keys::SigningKey;
use crate::limits::{MAX_HEADER_SIZE, MAX_TOKEN_LENGTH};
use crate::signer::{BuiltinSigner, Signer};
use crate::token::{compact, Header, Token, ALG_NONE};
use crate::utils::base64url;
use crate::utils::bounds::{validate_segment_size, validate_token_length};

static SHARED: Lazy<JwtHandler> = Lazy::new(JwtHandler::new);

/// Handler configuration
///
/// The size limits apply to both directions: a token this handler encodes is
/// a token it can decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerConfig {
    /// Maximum accepted length of a compact token (default: 64 KiB)
    pub max_token_length: usize,

    /// Maximum size of the header JSON (default: 8 KiB)
    ///
    /// The payload and signature are bounded by `max_token_length` only.
    pub max_header_size: usize,

    /// Accept `alg: none` tokens at decode time (default: false)
    pub allow_unsigned: bool,

    /// `typ` header parameter added at encode time when the caller's header
    /// has none (default: `Some("JWT")`)
    pub token_type: Option<String>,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            max_token_length: MAX_TOKEN_LENGTH,
            max_header_size: MAX_HEADER_SIZE,
            allow_unsigned: false,
            token_type: Some("JWT".to_string()),
        }
    }
}

impl HandlerConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum accepted token length in bytes
    pub fn max_length(mut self, bytes: usize) -> Self {
        self.max_token_length = bytes;
        self
    }

    /// Set the maximum header JSON size in bytes
    pub fn max_header_size(mut self, bytes: usize) -> Self {
        self.max_header_size = bytes;
        self
    }

    /// Accept unsecured (`alg: none`) tokens when decoding
    ///
    /// Such tokens never verify; this only lets their claims be read.
    pub fn allow_unsigned_tokens(mut self) -> Self {
        self.allow_unsigned = true;
        self
    }

    /// Set the default `typ` header parameter
    pub fn with_token_type(mut self, typ: impl Into<String>) -> Self {
        self.token_type = Some(typ.into());
        self
    }

    /// Do not add a `typ` header parameter
    pub fn without_token_type(mut self) -> Self {
        self.token_type = None;
        self
    }
}

/// Encodes, decodes and verifies JWTs in compact serialization
///
/// Cheap to clone and safe to share across threads; every operation is a
/// pure function of its arguments and the handler's immutable state.
///
/// # Examples
///
/// ```ignore
/// use jwtcodec::*;
///
/// let handler = JwtHandler::shared();
/// let key = SigningKey::hs256("secret");
///
/// let payload = ClaimSet::new()
///     .with("sub", "11228")
///     .with("iss", "me")
///     .with("aud", "you");
///
/// let compact = handler.encode(&ClaimSet::new(), &payload, &key)?;
/// let token = handler.decode(&compact)?;
///
/// assert!(handler.verify(&token, &key)?);
/// assert!(!handler.verify(&token, &SigningKey::hs256("wrong-secret"))?);
/// ```
#[derive(Clone)]
pub struct JwtHandler {
    config: HandlerConfig,
    signer: Arc<dyn Signer>,
}

impl Default for JwtHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for JwtHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtHandler")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl JwtHandler {
    /// Handler with the default configuration and the built-in signer
    pub fn new() -> Self {
        Self::with_config(HandlerConfig::default())
    }

    /// Handler with a custom configuration and the built-in signer
    pub fn with_config(config: HandlerConfig) -> Self {
        Self {
            config,
            signer: Arc::new(BuiltinSigner),
        }
    }

    /// Replace the signer collaborator
    pub fn with_signer(mut self, signer: impl Signer + 'static) -> Self {
        self.signer = Arc::new(signer);
        self
    }

    /// Process-wide handler with the default configuration
    ///
    /// Built on first use and shared by every caller afterwards.
    pub fn shared() -> &'static JwtHandler {
        &SHARED
    }

    /// Get the configuration
    pub fn config(&self) -> &HandlerConfig {
        &self.config
    }

    /// Encode and sign a token, returning its compact serialization
    ///
    /// `alg` in `header` is overwritten with the algorithm `key` is declared
    /// for and placed first. Other header parameters keep their order.
    ///
    /// # Errors
    ///
    /// - `SegmentTooLarge` if the header or payload JSON exceeds the
    ///   configured limits
    /// - `TokenTooLarge` if the compact token would exceed `max_token_length`
    /// - `SigningFailed` / `KeyTypeMismatch` from the signer
    pub fn encode(&self, header: &ClaimSet, payload: &ClaimSet, key: &SigningKey) -> Result<String> {
        self.encode_token(header, payload, key).map(|token| token.compile())
    }

    /// Like [`encode`](Self::encode), returning the decoded [`Token`]
    pub fn encode_token(
        &self,
        header: &ClaimSet,
        payload: &ClaimSet,
        key: &SigningKey,
    ) -> Result<Token> {
        let algorithm = key.algorithm();
        let header = self.build_header(header, algorithm.as_str())?;

        let (header_b64, payload_b64) = self.encode_segments(&header, payload)?;
        let signing_input = compact::signing_input(&header_b64, &payload_b64);

        let signature = self
            .signer
            .sign(algorithm, signing_input.as_bytes(), key.key())?;
        if signature.is_empty() {
            return Err(Error::SigningFailed("signer returned an empty signature".into()));
        }
        let signature_b64 = base64url::encode_bytes(&signature);

        validate_token_length(
            signing_input.len() + 1 + signature_b64.len(),
            self.config.max_token_length,
        )?;

        trace!(%algorithm, claims = payload.len(), "encoded token");

        Ok(Token::from_parts(
            header_b64,
            payload_b64,
            signature_b64,
            signature,
            header,
            payload.clone(),
        ))
    }

    /// Encode an unsecured token (`alg: none`, empty signature)
    ///
    /// The result never verifies, and decoding it requires
    /// [`HandlerConfig::allow_unsigned_tokens`].
    pub fn encode_unsigned(&self, header: &ClaimSet, payload: &ClaimSet) -> Result<String> {
        let header = self.build_header(header, ALG_NONE)?;
        let (header_b64, payload_b64) = self.encode_segments(&header, payload)?;

        let token = compact::append_signature(compact::signing_input(&header_b64, &payload_b64), &[]);
        validate_token_length(token.len(), self.config.max_token_length)?;

        trace!(claims = payload.len(), "encoded unsecured token");
        Ok(token)
    }

    fn encode_segments(&self, header: &Header, payload: &ClaimSet) -> Result<(String, String)> {
        let header_json = header.claims().serialize()?;
        validate_segment_size("header", header_json.len(), self.config.max_header_size)?;

        let payload_json = payload.serialize()?;
        validate_segment_size("payload", payload_json.len(), self.config.max_token_length)?;

        Ok((
            base64url::encode_bytes(&header_json),
            base64url::encode_bytes(&payload_json),
        ))
    }

    fn decode_segment(segment: &str, encoded: &str, max: usize) -> Result<Vec<u8>> {
        validate_segment_size(segment, base64url::decoded_len(encoded), max)?;
        base64url::decode_bytes(encoded)
    }

    fn build_header(&self, params: &ClaimSet, algorithm: &str) -> Result<Header> {
        let mut claims = ClaimSet::new().with("alg", algorithm);

        if let Some(typ) = &self.config.token_type {
            if !params.contains_key("typ") {
                claims.insert("typ", typ.as_str());
            }
        }

        for (name, value) in params.iter().filter(|(name, _)| *name != "alg") {
            claims.insert(name, value.clone());
        }

        Header::from_claims(claims)
    }

    /// Decode a compact token without checking its signature
    ///
    /// # Errors
    ///
    /// - `TokenTooLarge` if the input exceeds the configured length
    /// - `SegmentTooLarge` if the header exceeds the configured header size
    /// - `FormatInvalid` unless there are exactly three segments with a
    ///   non-empty header and payload
    /// - `FormatInvalidBase64` for a segment that is not valid Base64URL
    /// - `FormatInvalidJson` / `FormatInvalidSchema` for a segment that is not
    ///   a JSON object
    /// - `AlgorithmNoneRejected` for `alg: none` unless unsigned tokens are allowed
    pub fn decode(&self, token: &str) -> Result<Token> {
        let max = self.config.max_token_length;
        validate_token_length(token.len(), max)?;

        let (header_b64, payload_b64, signature_b64) = compact::split(token)?;

        let header_bytes =
            Self::decode_segment("header", header_b64, self.config.max_header_size)?;
        let payload_bytes = Self::decode_segment("payload", payload_b64, max)?;
        let signature = Self::decode_segment("signature", signature_b64, max)?;

        let header = Header::from_claims(ClaimSet::parse(&header_bytes)?)?;
        let claims = ClaimSet::parse(&payload_bytes)?;

        if header.is_unsigned() {
            if !self.config.allow_unsigned {
                debug!("rejected unsecured token");
                return Err(Error::AlgorithmNoneRejected);
            }
            if !signature.is_empty() {
                return Err(Error::FormatInvalid(
                    "unsecured token must have an empty signature".into(),
                ));
            }
        } else if signature.is_empty() {
            return Err(Error::FormatInvalid("signature segment is empty".into()));
        }

        trace!(
            algorithm = header.algorithm_str(),
            claims = claims.len(),
            "decoded token"
        );

        Ok(Token::from_parts(
            header_b64,
            payload_b64,
            signature_b64,
            signature,
            header,
            claims,
        ))
    }

    /// Check a token's signature against `key`
    ///
    /// The signature is checked over the token's stored segments. Returns
    /// `Ok(false)` for a signature that does not match, for a token whose
    /// `alg` differs from the key's algorithm, and for unsecured tokens.
    ///
    /// # Errors
    ///
    /// `KeyTypeMismatch` when the key material cannot serve its declared
    /// algorithm.
    pub fn verify(&self, token: &Token, key: &SigningKey) -> Result<bool> {
        let header = token.header();
        if header.is_unsigned() {
            debug!("unsecured token never verifies");
            return Ok(false);
        }

        let algorithm = key.algorithm();
        if header.algorithm_str() != algorithm.as_str() {
            debug!(
                token_alg = header.algorithm_str(),
                key_alg = %algorithm,
                "algorithm mismatch"
            );
            return Ok(false);
        }

        let valid = self.signer.verify(
            algorithm,
            token.signing_input().as_bytes(),
            token.signature(),
            key.key(),
        )?;

        if !valid {
            debug!(%algorithm, "signature mismatch");
        }
        Ok(valid)
    }
}
