//! Signer/verifier collaborator
//!
//! The token codec never computes signatures itself. It hands the signing
//! input to a [`Signer`], which is injected into the handler. The built-in
//! strategy dispatches to the algorithms compiled into this crate; callers
//! with an HSM or a remote KMS implement the trait themselves.

use crate::algorithm::{get_algorithm, AlgorithmId};
use crate::error::Result;
use crate::keys::Key;

/// Produces and checks signatures over a signing input
///
/// Implementations must be safe to share across threads: one instance serves
/// every call made through a handler.
pub trait Signer: Send + Sync {
    /// Sign `signing_input` with `key` under `algorithm`
    ///
    /// Deterministic algorithms (HMAC) return the same bytes for the same
    /// input; randomized ones (ECDSA) return any valid signature.
    fn sign(&self, algorithm: &AlgorithmId, signing_input: &[u8], key: &Key) -> Result<Vec<u8>>;

    /// Check `signature` over `signing_input`
    ///
    /// Returns `Ok(false)` for a signature that does not match. Fails with
    /// `KeyTypeMismatch` only when `key` cannot serve `algorithm`.
    fn verify(
        &self,
        algorithm: &AlgorithmId,
        signing_input: &[u8],
        signature: &[u8],
        key: &Key,
    ) -> Result<bool>;
}

/// Default strategy backed by the crate's built-in algorithms
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSigner;

impl Signer for BuiltinSigner {
    fn sign(&self, algorithm: &AlgorithmId, signing_input: &[u8], key: &Key) -> Result<Vec<u8>> {
        get_algorithm(algorithm)?.sign(signing_input, key)
    }

    fn verify(
        &self,
        algorithm: &AlgorithmId,
        signing_input: &[u8],
        signature: &[u8],
        key: &Key,
    ) -> Result<bool> {
        get_algorithm(algorithm)?.verify(signing_input, signature, key)
    }
}

impl<S: Signer + ?Sized> Signer for std::sync::Arc<S> {
    fn sign(&self, algorithm: &AlgorithmId, signing_input: &[u8], key: &Key) -> Result<Vec<u8>> {
        (**self).sign(algorithm, signing_input, key)
    }

    fn verify(
        &self,
        algorithm: &AlgorithmId,
        signing_input: &[u8],
        signature: &[u8],
        key: &Key,
    ) -> Result<bool> {
        (**self).verify(algorithm, signing_input, signature, key)
    }
}
