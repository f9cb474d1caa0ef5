/// Key types for JWT signing and verification
///
/// This module provides a type-safe abstraction over different key types:
/// - Symmetric keys (for HMAC algorithms)
/// - Asymmetric key pairs and public keys (for RSA/ECDSA algorithms)
/// - Opaque handles (HSM slots, KMS key references) for custom signers
///
/// Key material is never printed: `Debug` output is redacted and symmetric
/// secrets are wiped on drop.
use crate::algorithm::AlgorithmId;
use crate::error::{Error, Result};
use std::any::Any;
use std::sync::Arc;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Key material usable for signing and/or verification
#[derive(Debug, Clone)]
pub enum Key {
    /// Symmetric key for HMAC algorithms
    Symmetric(SymmetricKey),

    /// Asymmetric key for RSA/ECDSA algorithms
    Asymmetric(AsymmetricKey),

    /// Opaque handle interpreted only by a custom [`Signer`](crate::Signer)
    External(ExternalKey),
}

impl Key {
    /// Create a symmetric key from bytes
    pub fn symmetric(secret: impl Into<Vec<u8>>) -> Self {
        Key::Symmetric(SymmetricKey::new(secret.into()))
    }

    /// Create an RSA public key from a DER-encoded `RSAPublicKey` (PKCS#1)
    #[cfg(feature = "rsa")]
    pub fn rsa_public(der: impl Into<Vec<u8>>) -> Self {
        Key::Asymmetric(AsymmetricKey::RsaPublic(RsaPublicKey::new(der.into())))
    }

    /// Create an RSA key pair from a PKCS#8 v1 document
    #[cfg(feature = "rsa")]
    pub fn rsa_pkcs8(pkcs8: &[u8]) -> Result<Self> {
        RsaPrivateKey::from_pkcs8(pkcs8).map(|key| Key::Asymmetric(AsymmetricKey::RsaPrivate(key)))
    }

    /// Create an ECDSA public key from an uncompressed SEC1 point (`04 || x || y`)
    #[cfg(feature = "ecdsa")]
    pub fn ecdsa_public(point: impl Into<Vec<u8>>, curve: EcdsaCurve) -> Self {
        Key::Asymmetric(AsymmetricKey::EcdsaPublic(EcdsaPublicKey::new(
            point.into(),
            curve,
        )))
    }

    /// Create an ECDSA key pair from a PKCS#8 v1 document
    #[cfg(feature = "ecdsa")]
    pub fn ecdsa_pkcs8(pkcs8: &[u8], curve: EcdsaCurve) -> Result<Self> {
        EcdsaPrivateKey::from_pkcs8(pkcs8, curve)
            .map(|key| Key::Asymmetric(AsymmetricKey::EcdsaPrivate(key)))
    }

    /// Wrap an opaque key handle for a custom signer
    pub fn external(handle: impl Any + Send + Sync) -> Self {
        Key::External(ExternalKey::new(handle))
    }

    /// Get key type name for error messages
    pub fn key_type(&self) -> &'static str {
        match self {
            Key::Symmetric(_) => "Symmetric",
            Key::Asymmetric(key) => key.key_type(),
            Key::External(_) => "External",
        }
    }

    /// Check that this key can serve `algorithm`
    ///
    /// External keys and custom algorithms are left to the signer.
    pub fn ensure_compatible(&self, algorithm: &AlgorithmId) -> Result<()> {
        if let Key::External(_) = self {
            return Ok(());
        }

        match algorithm {
            AlgorithmId::HS256 | AlgorithmId::HS384 | AlgorithmId::HS512 => {
                self.as_symmetric(algorithm).map(|_| ())
            }
            #[cfg(feature = "rsa")]
            AlgorithmId::RS256 | AlgorithmId::RS384 | AlgorithmId::RS512 => {
                self.rsa_public_der(algorithm).map(|_| ())
            }
            #[cfg(feature = "ecdsa")]
            AlgorithmId::ES256 => self.ecdsa_public_point(algorithm, EcdsaCurve::P256).map(|_| ()),
            #[cfg(feature = "ecdsa")]
            AlgorithmId::ES384 => self.ecdsa_public_point(algorithm, EcdsaCurve::P384).map(|_| ()),
            AlgorithmId::Custom(_) => Ok(()),
        }
    }

    /// Get the external handle or return error
    pub fn as_external(&self, algorithm: &AlgorithmId) -> Result<&ExternalKey> {
        match self {
            Key::External(key) => Ok(key),
            _ => Err(self.mismatch(algorithm, "External")),
        }
    }

    /// Get as symmetric key or return error
    pub fn as_symmetric(&self, algorithm: &AlgorithmId) -> Result<&SymmetricKey> {
        match self {
            Key::Symmetric(key) => Ok(key),
            _ => Err(self.mismatch(algorithm, "Symmetric")),
        }
    }

    /// Get the RSA private key or return error
    #[cfg(feature = "rsa")]
    pub fn as_rsa_private(&self, algorithm: &AlgorithmId) -> Result<&RsaPrivateKey> {
        match self {
            Key::Asymmetric(AsymmetricKey::RsaPrivate(key)) => Ok(key),
            _ => Err(self.mismatch(algorithm, "RSA private")),
        }
    }

    /// Get the RSA public key DER, from either a public key or a key pair
    #[cfg(feature = "rsa")]
    pub fn rsa_public_der(&self, algorithm: &AlgorithmId) -> Result<&[u8]> {
        match self {
            Key::Asymmetric(AsymmetricKey::RsaPublic(key)) => Ok(key.as_der()),
            Key::Asymmetric(AsymmetricKey::RsaPrivate(key)) => Ok(key.public_der()),
            _ => Err(self.mismatch(algorithm, "RSA")),
        }
    }

    /// Get the ECDSA private key for `curve` or return error
    #[cfg(feature = "ecdsa")]
    pub fn as_ecdsa_private(
        &self,
        algorithm: &AlgorithmId,
        curve: EcdsaCurve,
    ) -> Result<&EcdsaPrivateKey> {
        match self {
            Key::Asymmetric(AsymmetricKey::EcdsaPrivate(key)) if key.curve() == curve => Ok(key),
            _ => Err(self.mismatch(algorithm, curve.private_key_type())),
        }
    }

    /// Get the ECDSA public point for `curve`, from either a public key or a key pair
    #[cfg(feature = "ecdsa")]
    pub fn ecdsa_public_point(&self, algorithm: &AlgorithmId, curve: EcdsaCurve) -> Result<&[u8]> {
        match self {
            Key::Asymmetric(AsymmetricKey::EcdsaPublic(key)) if key.curve() == curve => {
                Ok(key.as_bytes())
            }
            Key::Asymmetric(AsymmetricKey::EcdsaPrivate(key)) if key.curve() == curve => {
                Ok(key.public_point())
            }
            _ => Err(self.mismatch(algorithm, curve.key_type())),
        }
    }

    fn mismatch(&self, algorithm: &AlgorithmId, expected: &str) -> Error {
        Error::KeyTypeMismatch {
            algorithm: algorithm.to_string(),
            expected_key_type: expected.to_string(),
            actual_key_type: self.key_type().to_string(),
        }
    }
}

/// Symmetric key for HMAC algorithms
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SymmetricKey {
    secret: Vec<u8>,
}

impl SymmetricKey {
    /// Create a new symmetric key
    pub fn new(secret: Vec<u8>) -> Self {
        Self { secret }
    }

    /// Get the secret bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.secret
    }
}

impl std::fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymmetricKey")
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl From<Vec<u8>> for SymmetricKey {
    fn from(secret: Vec<u8>) -> Self {
        Self::new(secret)
    }
}

impl From<&[u8]> for SymmetricKey {
    fn from(secret: &[u8]) -> Self {
        Self::new(secret.to_vec())
    }
}

impl From<String> for SymmetricKey {
    fn from(secret: String) -> Self {
        Self::new(secret.into_bytes())
    }
}

impl From<&str> for SymmetricKey {
    fn from(secret: &str) -> Self {
        Self::new(secret.as_bytes().to_vec())
    }
}

/// Opaque key handle owned by a custom signer
///
/// The crate never looks inside; signers recover their own type with
/// [`downcast_ref`](Self::downcast_ref).
#[derive(Clone)]
pub struct ExternalKey {
    handle: Arc<dyn Any + Send + Sync>,
}

impl ExternalKey {
    /// Wrap a signer-specific handle
    pub fn new(handle: impl Any + Send + Sync) -> Self {
        Self {
            handle: Arc::new(handle),
        }
    }

    /// Borrow the handle as `T`, if that is its type
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.handle.downcast_ref::<T>()
    }
}

impl std::fmt::Debug for ExternalKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExternalKey").finish_non_exhaustive()
    }
}

/// Asymmetric key for RSA/ECDSA algorithms
#[derive(Debug, Clone)]
pub enum AsymmetricKey {
    /// RSA public key (verification only)
    #[cfg(feature = "rsa")]
    RsaPublic(RsaPublicKey),

    /// RSA key pair (signing and verification)
    #[cfg(feature = "rsa")]
    RsaPrivate(RsaPrivateKey),

    /// ECDSA public key (verification only)
    #[cfg(feature = "ecdsa")]
    EcdsaPublic(EcdsaPublicKey),

    /// ECDSA key pair (signing and verification)
    #[cfg(feature = "ecdsa")]
    EcdsaPrivate(EcdsaPrivateKey),
}

impl AsymmetricKey {
    fn key_type(&self) -> &'static str {
        match *self {
            #[cfg(feature = "rsa")]
            AsymmetricKey::RsaPublic(_) => "RSA public",
            #[cfg(feature = "rsa")]
            AsymmetricKey::RsaPrivate(_) => "RSA private",
            #[cfg(feature = "ecdsa")]
            AsymmetricKey::EcdsaPublic(ref key) => key.curve().key_type(),
            #[cfg(feature = "ecdsa")]
            AsymmetricKey::EcdsaPrivate(ref key) => key.curve().private_key_type(),
        }
    }
}

/// RSA public key (DER-encoded `RSAPublicKey`)
#[cfg(feature = "rsa")]
#[derive(Debug, Clone)]
pub struct RsaPublicKey {
    der: Vec<u8>,
}

#[cfg(feature = "rsa")]
impl RsaPublicKey {
    /// Create a new RSA public key from DER bytes
    pub fn new(der: Vec<u8>) -> Self {
        Self { der }
    }

    /// Get the DER-encoded key bytes
    pub fn as_der(&self) -> &[u8] {
        &self.der
    }
}

/// RSA key pair parsed from PKCS#8
#[cfg(feature = "rsa")]
#[derive(Clone)]
pub struct RsaPrivateKey {
    keypair: Arc<ring::signature::RsaKeyPair>,
}

#[cfg(feature = "rsa")]
impl RsaPrivateKey {
    /// Parse a PKCS#8 v1 document
    pub fn from_pkcs8(pkcs8: &[u8]) -> Result<Self> {
        let keypair = ring::signature::RsaKeyPair::from_pkcs8(pkcs8)
            .map_err(|e| Error::KeyInvalid(format!("RSA key rejected: {e}")))?;
        Ok(Self {
            keypair: Arc::new(keypair),
        })
    }

    pub(crate) fn keypair(&self) -> &ring::signature::RsaKeyPair {
        &self.keypair
    }

    /// Get the DER-encoded public half
    pub fn public_der(&self) -> &[u8] {
        self.keypair.public().as_ref()
    }
}

#[cfg(feature = "rsa")]
impl std::fmt::Debug for RsaPrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RsaPrivateKey")
            .field("modulus_len", &self.keypair.public().modulus_len())
            .finish_non_exhaustive()
    }
}

/// ECDSA curve identifier
#[cfg(feature = "ecdsa")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EcdsaCurve {
    /// P-256 (secp256r1) curve
    P256,
    /// P-384 (secp384r1) curve
    P384,
}

#[cfg(feature = "ecdsa")]
impl EcdsaCurve {
    fn key_type(&self) -> &'static str {
        match self {
            EcdsaCurve::P256 => "ECDSA P-256",
            EcdsaCurve::P384 => "ECDSA P-384",
        }
    }

    fn private_key_type(&self) -> &'static str {
        match self {
            EcdsaCurve::P256 => "ECDSA P-256 private",
            EcdsaCurve::P384 => "ECDSA P-384 private",
        }
    }

    fn signing_algorithm(&self) -> &'static ring::signature::EcdsaSigningAlgorithm {
        match self {
            EcdsaCurve::P256 => &ring::signature::ECDSA_P256_SHA256_FIXED_SIGNING,
            EcdsaCurve::P384 => &ring::signature::ECDSA_P384_SHA384_FIXED_SIGNING,
        }
    }
}

/// ECDSA public key (uncompressed SEC1 point)
#[cfg(feature = "ecdsa")]
#[derive(Debug, Clone)]
pub struct EcdsaPublicKey {
    point: Vec<u8>,
    curve: EcdsaCurve,
}

#[cfg(feature = "ecdsa")]
impl EcdsaPublicKey {
    /// Create a new ECDSA public key from point bytes
    pub fn new(point: Vec<u8>, curve: EcdsaCurve) -> Self {
        Self { point, curve }
    }

    /// Get the encoded point
    pub fn as_bytes(&self) -> &[u8] {
        &self.point
    }

    /// Get the curve
    pub fn curve(&self) -> EcdsaCurve {
        self.curve
    }
}

/// ECDSA key pair parsed from PKCS#8
#[cfg(feature = "ecdsa")]
#[derive(Clone)]
pub struct EcdsaPrivateKey {
    keypair: Arc<ring::signature::EcdsaKeyPair>,
    curve: EcdsaCurve,
}

#[cfg(feature = "ecdsa")]
impl EcdsaPrivateKey {
    /// Parse a PKCS#8 v1 document for `curve`
    pub fn from_pkcs8(pkcs8: &[u8], curve: EcdsaCurve) -> Result<Self> {
        let rng = ring::rand::SystemRandom::new();
        let keypair =
            ring::signature::EcdsaKeyPair::from_pkcs8(curve.signing_algorithm(), pkcs8, &rng)
                .map_err(|e| Error::KeyInvalid(format!("ECDSA key rejected: {e}")))?;
        Ok(Self {
            keypair: Arc::new(keypair),
            curve,
        })
    }

    pub(crate) fn keypair(&self) -> &ring::signature::EcdsaKeyPair {
        &self.keypair
    }

    /// Get the encoded public point
    pub fn public_point(&self) -> &[u8] {
        use ring::signature::KeyPair;
        self.keypair.public_key().as_ref()
    }

    /// Get the curve
    pub fn curve(&self) -> EcdsaCurve {
        self.curve
    }
}

#[cfg(feature = "ecdsa")]
impl std::fmt::Debug for EcdsaPrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EcdsaPrivateKey")
            .field("curve", &self.curve)
            .finish_non_exhaustive()
    }
}

/// Key material bound to the algorithm it is declared for
///
/// The facade writes this algorithm into the `alg` header at encode time and
/// only accepts tokens declaring it at verify time.
#[derive(Debug, Clone)]
pub struct SigningKey {
    algorithm: AlgorithmId,
    key: Key,
}

impl SigningKey {
    /// Bind `key` to `algorithm`, rejecting key types that cannot serve it
    pub fn new(algorithm: AlgorithmId, key: Key) -> Result<Self> {
        key.ensure_compatible(&algorithm)?;
        Ok(Self { algorithm, key })
    }

    /// HMAC-SHA256 secret
    pub fn hs256(secret: impl Into<Vec<u8>>) -> Self {
        Self::hmac(AlgorithmId::HS256, secret)
    }

    /// HMAC-SHA384 secret
    pub fn hs384(secret: impl Into<Vec<u8>>) -> Self {
        Self::hmac(AlgorithmId::HS384, secret)
    }

    /// HMAC-SHA512 secret
    pub fn hs512(secret: impl Into<Vec<u8>>) -> Self {
        Self::hmac(AlgorithmId::HS512, secret)
    }

    fn hmac(algorithm: AlgorithmId, secret: impl Into<Vec<u8>>) -> Self {
        Self {
            algorithm,
            key: Key::symmetric(secret),
        }
    }

    /// The algorithm this key is declared for
    pub fn algorithm(&self) -> &AlgorithmId {
        &self.algorithm
    }

    /// The underlying key material
    pub fn key(&self) -> &Key {
        &self.key
    }
}
