use crate::algorithm::{Algorithm, AlgorithmId};
use crate::error::{Error, Result};
use crate::keys::Key;

use ring::rand::SystemRandom;
use ring::signature::{self, RsaEncoding, UnparsedPublicKey, VerificationAlgorithm};

/// RS256 algorithm (RSA with SHA-256)
pub struct RS256;

/// RS384 algorithm (RSA with SHA-384)
pub struct RS384;

/// RS512 algorithm (RSA with SHA-512)
pub struct RS512;

impl Algorithm for RS256 {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::RS256
    }

    fn sign(&self, signing_input: &[u8], key: &Key) -> Result<Vec<u8>> {
        sign_rsa(&self.id(), signing_input, key, &signature::RSA_PKCS1_SHA256)
    }

    fn verify(&self, signing_input: &[u8], signature: &[u8], key: &Key) -> Result<bool> {
        verify_rsa(
            &self.id(),
            signing_input,
            signature,
            key,
            &signature::RSA_PKCS1_2048_8192_SHA256,
        )
    }
}

impl Algorithm for RS384 {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::RS384
    }

    fn sign(&self, signing_input: &[u8], key: &Key) -> Result<Vec<u8>> {
        sign_rsa(&self.id(), signing_input, key, &signature::RSA_PKCS1_SHA384)
    }

    fn verify(&self, signing_input: &[u8], signature: &[u8], key: &Key) -> Result<bool> {
        verify_rsa(
            &self.id(),
            signing_input,
            signature,
            key,
            &signature::RSA_PKCS1_2048_8192_SHA384,
        )
    }
}

impl Algorithm for RS512 {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::RS512
    }

    fn sign(&self, signing_input: &[u8], key: &Key) -> Result<Vec<u8>> {
        sign_rsa(&self.id(), signing_input, key, &signature::RSA_PKCS1_SHA512)
    }

    fn verify(&self, signing_input: &[u8], signature: &[u8], key: &Key) -> Result<bool> {
        verify_rsa(
            &self.id(),
            signing_input,
            signature,
            key,
            &signature::RSA_PKCS1_2048_8192_SHA512,
        )
    }
}

/// Generic RSA PKCS#1 v1.5 signing
fn sign_rsa(
    algorithm: &AlgorithmId,
    signing_input: &[u8],
    key: &Key,
    padding: &'static dyn RsaEncoding,
) -> Result<Vec<u8>> {
    let keypair = key.as_rsa_private(algorithm)?.keypair();

    let rng = SystemRandom::new();
    let mut signature = vec![0u8; keypair.public().modulus_len()];
    keypair
        .sign(padding, &rng, signing_input, &mut signature)
        .map_err(|_| Error::SigningFailed(format!("{algorithm} signing failed")))?;

    Ok(signature)
}

/// Generic RSA signature verification
fn verify_rsa(
    algorithm: &AlgorithmId,
    signing_input: &[u8],
    signature: &[u8],
    key: &Key,
    verification: &'static dyn VerificationAlgorithm,
) -> Result<bool> {
    let public_key_der = key.rsa_public_der(algorithm)?;
    let public_key = UnparsedPublicKey::new(verification, public_key_der);

    Ok(public_key.verify(signing_input, signature).is_ok())
}
