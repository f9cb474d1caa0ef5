//! # jwtcodec - Minimal JWT Codec
//!
//! > Encode, decode and verify JSON Web Tokens in JWS compact serialization.
//!
//! **jwtcodec** turns claim sets into signed compact tokens and back. It keeps
//! the wire format bit-exact: decoded tokens remember their raw segments, so
//! verification signs over exactly the bytes that were received and a decoded
//! token re-emits the identical string.
//!
//! ## Overview
//!
//! A JWT in compact form is three Base64URL segments joined by `.`: a JOSE
//! header, a payload of claims, and a signature over the first two segments.
//! The crate is layered leaf-first:
//!
//! - [`utils::base64url`]: unpadded URL-safe Base64 (padded input accepted)
//! - [`ClaimSet`]: ordered JSON objects for headers and payloads
//! - [`token::compact`]: compose, split and signing input
//! - [`Signer`]: the signing collaborator, with [`BuiltinSigner`] as default
//! - [`JwtHandler`]: the `encode` / `decode` / `verify` facade
//!
//! ## Quick Start
//!
//! ```ignore
//! use jwtcodec::*;
//!
//! let handler = JwtHandler::shared();
//! let key = SigningKey::hs256("secret");
//!
//! let payload = ClaimSet::new()
//!     .with("sub", "11228")
//!     .with("iss", "me")
//!     .with("aud", "you");
//!
//! let compact = handler.encode(&ClaimSet::new(), &payload, &key)?;
//! let token = handler.decode(&compact)?;
//!
//! assert!(handler.verify(&token, &key)?);
//! ```
//!
//! `decode` never checks the signature. A decoded [`Token`] is untrusted until
//! [`JwtHandler::verify`] returns `true` for it.
//!
//! ## Sharing a Handler
//!
//! A handler holds only immutable configuration and an `Arc<dyn Signer>`.
//! Create one and share it across threads, or use [`JwtHandler::shared`],
//! which is built once per process.
//!
//! ## Algorithm Support
//!
//! All algorithms implement a common `Algorithm` trait:
//!
//! - **HMAC** (always enabled): HS256, HS384, HS512
//! - **RSA** (with `rsa` feature): RS256, RS384, RS512
//! - **ECDSA** (with `ecdsa` feature): ES256, ES384
//!
//! Other signing backends (HSMs, remote KMS) plug in by implementing [`Signer`]
//! and passing it to [`JwtHandler::with_signer`]. Such a signer can serve
//! algorithms the crate does not ship, named with [`AlgorithmId::custom`], and
//! receive opaque key handles through [`Key::external`]:
//!
//! ```ignore
//! let key = SigningKey::new(AlgorithmId::custom("EdDSA")?, Key::external(slot))?;
//! let handler = JwtHandler::new().with_signer(HsmSigner::connect()?);
//! let compact = handler.encode(&ClaimSet::new(), &payload, &key)?;
//! ```
//!
//! ## Features
//!
//! - **`rsa`**: RSA algorithms (RS256, RS384, RS512)
//! - **`ecdsa`**: ECDSA algorithms (ES256, ES384)
//! - **`all-algorithms`**: Enable all asymmetric algorithms (RSA + ECDSA)
//!
//! ## Security
//!
//! ### "none" Algorithm Rejection
//!
//! Unsecured tokens are rejected at decode time unless
//! [`HandlerConfig::allow_unsigned_tokens`] is set, and never verify.
//!
//! ### Timing Attack Protection
//!
//! HMAC signature verification uses constant-time comparison via the [`constant_time_eq`](https://crates.io/crates/constant_time_eq)
//! crate.
//!
//! ### Key Material
//!
//! Secrets are redacted from `Debug` output, zeroized on drop and never logged.
//!
//! ## References
//!
//! - [RFC 4648](https://datatracker.ietf.org/doc/html/rfc4648) - Base64URL
//! - [RFC 7515](https://datatracker.ietf.org/doc/html/rfc7515) - JSON Web Signature (JWS)
//! - [RFC 7519](https://datatracker.ietf.org/doc/html/rfc7519) - JSON Web Token (JWT)

// Core modules
pub mod error;
mod limits;
pub mod utils;

// Algorithm system
pub mod algorithm;
pub mod keys;
pub mod signer;

// Claims and tokens
pub mod claims;
pub mod token;

// Facade
pub mod ext;
pub mod handler;

// ============================================================================
// PUBLIC API
// ============================================================================

pub use handler::{HandlerConfig, JwtHandler};
pub use token::{Header, Token};

pub use algorithm::{AlgorithmId, CustomAlgorithm};
pub use claims::ClaimSet;
pub use error::{Error, Result};
pub use ext::{CompileToString, ToJwtToken};
pub use keys::{ExternalKey, Key, SigningKey};
pub use signer::{BuiltinSigner, Signer};

#[cfg(feature = "ecdsa")]
pub use keys::EcdsaCurve;
