use crate::algorithm::{Algorithm, AlgorithmId};
use crate::error::{Error, Result};
use crate::keys::Key;

use constant_time_eq::constant_time_eq;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};

/// HS256 algorithm (HMAC with SHA-256)
pub struct HS256;

/// HS384 algorithm (HMAC with SHA-384)
pub struct HS384;

/// HS512 algorithm (HMAC with SHA-512)
pub struct HS512;

macro_rules! compute_mac {
    ($digest:ty, $secret:expr, $input:expr) => {{
        let mut mac = Hmac::<$digest>::new_from_slice($secret)
            .map_err(|e| Error::KeyInvalid(format!("HMAC key rejected: {e}")))?;
        mac.update($input);
        mac.finalize().into_bytes().to_vec()
    }};
}

impl Algorithm for HS256 {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::HS256
    }

    fn sign(&self, signing_input: &[u8], key: &Key) -> Result<Vec<u8>> {
        let secret = key.as_symmetric(&self.id())?;
        Ok(compute_mac!(Sha256, secret.as_bytes(), signing_input))
    }

    fn verify(&self, signing_input: &[u8], signature: &[u8], key: &Key) -> Result<bool> {
        let expected = self.sign(signing_input, key)?;
        Ok(signatures_match(&expected, signature))
    }
}

impl Algorithm for HS384 {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::HS384
    }

    fn sign(&self, signing_input: &[u8], key: &Key) -> Result<Vec<u8>> {
        let secret = key.as_symmetric(&self.id())?;
        Ok(compute_mac!(Sha384, secret.as_bytes(), signing_input))
    }

    fn verify(&self, signing_input: &[u8], signature: &[u8], key: &Key) -> Result<bool> {
        let expected = self.sign(signing_input, key)?;
        Ok(signatures_match(&expected, signature))
    }
}

impl Algorithm for HS512 {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::HS512
    }

    fn sign(&self, signing_input: &[u8], key: &Key) -> Result<Vec<u8>> {
        let secret = key.as_symmetric(&self.id())?;
        Ok(compute_mac!(Sha512, secret.as_bytes(), signing_input))
    }

    fn verify(&self, signing_input: &[u8], signature: &[u8], key: &Key) -> Result<bool> {
        let expected = self.sign(signing_input, key)?;
        Ok(signatures_match(&expected, signature))
    }
}

/// Constant-time signature comparison
fn signatures_match(expected: &[u8], provided: &[u8]) -> bool {
    expected.len() == provided.len() && constant_time_eq(expected, provided)
}
