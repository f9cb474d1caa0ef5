use crate::algorithm::{Algorithm, AlgorithmId};
use crate::error::{Error, Result};
use crate::keys::{EcdsaCurve, Key};

use ring::rand::SystemRandom;
use ring::signature::{self, UnparsedPublicKey, VerificationAlgorithm};

/// ES256 algorithm (ECDSA with P-256 and SHA-256)
pub struct ES256;

/// ES384 algorithm (ECDSA with P-384 and SHA-384)
pub struct ES384;

impl Algorithm for ES256 {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::ES256
    }

    fn sign(&self, signing_input: &[u8], key: &Key) -> Result<Vec<u8>> {
        sign_ecdsa(&self.id(), signing_input, key, EcdsaCurve::P256)
    }

    fn verify(&self, signing_input: &[u8], signature: &[u8], key: &Key) -> Result<bool> {
        verify_ecdsa(
            &self.id(),
            signing_input,
            signature,
            key,
            EcdsaCurve::P256,
            &signature::ECDSA_P256_SHA256_FIXED,
        )
    }
}

impl Algorithm for ES384 {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::ES384
    }

    fn sign(&self, signing_input: &[u8], key: &Key) -> Result<Vec<u8>> {
        sign_ecdsa(&self.id(), signing_input, key, EcdsaCurve::P384)
    }

    fn verify(&self, signing_input: &[u8], signature: &[u8], key: &Key) -> Result<bool> {
        verify_ecdsa(
            &self.id(),
            signing_input,
            signature,
            key,
            EcdsaCurve::P384,
            &signature::ECDSA_P384_SHA384_FIXED,
        )
    }
}

/// Generic ECDSA signing
///
/// JWS signatures use the fixed-length `R || S` form (RFC 7518 Section 3.4),
/// not ASN.1 DER.
fn sign_ecdsa(
    algorithm: &AlgorithmId,
    signing_input: &[u8],
    key: &Key,
    curve: EcdsaCurve,
) -> Result<Vec<u8>> {
    let keypair = key.as_ecdsa_private(algorithm, curve)?.keypair();

    let rng = SystemRandom::new();
    let signature = keypair
        .sign(&rng, signing_input)
        .map_err(|_| Error::SigningFailed(format!("{algorithm} signing failed")))?;

    Ok(signature.as_ref().to_vec())
}

/// Generic ECDSA signature verification
fn verify_ecdsa(
    algorithm: &AlgorithmId,
    signing_input: &[u8],
    signature: &[u8],
    key: &Key,
    curve: EcdsaCurve,
    verification: &'static dyn VerificationAlgorithm,
) -> Result<bool> {
    let point = key.ecdsa_public_point(algorithm, curve)?;
    let public_key = UnparsedPublicKey::new(verification, point);

    Ok(public_key.verify(signing_input, signature).is_ok())
}
