//! Per-algorithm round-trip tests
//!
//! Each supported algorithm must:
//! 1. Encode and sign a token
//! 2. Decode it back to the same claims
//! 3. Verify with the right key and reject the wrong one

use jwtcodec::*;
use serde_json::json;

fn sample_claims() -> ClaimSet {
    ClaimSet::new()
        .with("sub", "11228")
        .with("iss", "me")
        .with("aud", "you")
}

fn assert_round_trip(key: &SigningKey, wrong: &SigningKey) {
    let handler = JwtHandler::shared();

    let compact = handler.encode(&ClaimSet::new(), &sample_claims(), key).unwrap();
    let token = handler.decode(&compact).unwrap();

    assert_eq!(token.header().algorithm_str(), key.algorithm().as_str());
    assert_eq!(token.claims(), &sample_claims());
    assert_eq!(token.compile(), compact);
    assert!(handler.verify(&token, key).unwrap());
    assert!(!handler.verify(&token, wrong).unwrap());
}

// ============================================================================
// HMAC Algorithm Round-Trips (HS256, HS384, HS512)
// ============================================================================

#[test]
fn round_trip_hs256() {
    assert_round_trip(
        &SigningKey::hs256("secret"),
        &SigningKey::hs256("wrong-secret"),
    );
}

#[test]
fn round_trip_hs384() {
    assert_round_trip(
        &SigningKey::hs384("test-secret-hs384-key"),
        &SigningKey::hs384("wrong-secret"),
    );
}

#[test]
fn round_trip_hs512() {
    assert_round_trip(
        &SigningKey::hs512("test-secret-hs512-key"),
        &SigningKey::hs512("wrong-secret"),
    );
}

#[test]
fn hmac_is_deterministic() {
    let handler = JwtHandler::shared();
    let key = SigningKey::hs256("secret");

    let first = handler.encode(&ClaimSet::new(), &sample_claims(), &key).unwrap();
    let second = handler.encode(&ClaimSet::new(), &sample_claims(), &key).unwrap();
    assert_eq!(first, second);
}

#[test]
fn claim_order_and_types_survive() {
    let handler = JwtHandler::shared();
    let key = SigningKey::hs256("secret");
    let claims = ClaimSet::new()
        .with("z", 1)
        .with("a", "text")
        .with("big", json!(9007199254740993u64))
        .with("ratio", 0.25)
        .with("roles", json!(["admin", "user"]))
        .with("meta", json!({"nested": {"ok": true}, "nothing": null}));

    let compact = handler.encode(&ClaimSet::new(), &claims, &key).unwrap();
    let token = handler.decode(&compact).unwrap();

    let keys: Vec<&str> = token.claims().keys().collect();
    assert_eq!(keys, ["z", "a", "big", "ratio", "roles", "meta"]);
    assert_eq!(token.claims().get("big"), Some(&json!(9007199254740993u64)));
    assert!(token.claims().get("z").is_some_and(|v| v.is_i64()));
    assert!(token.claims().get("ratio").is_some_and(|v| v.is_f64()));
    assert_eq!(token.claims().serialize().unwrap(), claims.serialize().unwrap());
}

#[test]
fn large_integer_beyond_u64_survives() {
    let handler = JwtHandler::shared();
    let key = SigningKey::hs256("secret");
    let payload = br#"{"n":123456789012345678901234567890,"f":1.0}"#;

    let compact = format!(
        "{}.{}.{}",
        utils::base64url::encode(r#"{"alg":"HS256"}"#),
        utils::base64url::encode_bytes(payload),
        utils::base64url::encode("placeholder")
    );
    let token = handler.decode(&compact).unwrap();

    assert_eq!(token.claims().serialize().unwrap(), payload.to_vec());

    let reencoded = handler.encode(&ClaimSet::new(), token.claims(), &key).unwrap();
    let again = handler.decode(&reencoded).unwrap();
    assert_eq!(again.claims().serialize().unwrap(), payload.to_vec());
}

#[test]
fn custom_header_parameters_survive() {
    let handler = JwtHandler::shared();
    let key = SigningKey::hs256("secret");
    let header = ClaimSet::new()
        .with("kid", "key-2024")
        .with("x-custom", json!({"tenant": 7}));

    let compact = handler.encode(&header, &sample_claims(), &key).unwrap();
    let token = handler.decode(&compact).unwrap();

    assert_eq!(token.header().key_id(), Some("key-2024"));
    assert_eq!(
        token.header().claims().get("x-custom"),
        Some(&json!({"tenant": 7}))
    );
    assert!(handler.verify(&token, &key).unwrap());
}

// ============================================================================
// RSA Algorithm Round-Trips (RS256, RS384, RS512)
// ============================================================================

#[cfg(feature = "rsa")]
mod rsa_tests {
    use super::*;
    use rsa::{pkcs8::EncodePrivateKey, RsaPrivateKey};

    fn generate_rsa_key() -> Key {
        let mut rng = rand::thread_rng();
        let private_key = RsaPrivateKey::new(&mut rng, 2048).expect("Failed to generate key");
        let pkcs8 = private_key.to_pkcs8_der().expect("Failed to encode key");
        Key::rsa_pkcs8(pkcs8.as_bytes()).expect("Failed to load key")
    }

    #[test]
    fn round_trip_rsa_family() {
        let key = generate_rsa_key();
        let other = generate_rsa_key();

        for algorithm in [AlgorithmId::RS256, AlgorithmId::RS384, AlgorithmId::RS512] {
            assert_round_trip(
                &SigningKey::new(algorithm, key.clone()).unwrap(),
                &SigningKey::new(algorithm, other.clone()).unwrap(),
            );
        }
    }

    #[test]
    fn verify_with_public_key_only() {
        let key = generate_rsa_key();
        let public = Key::rsa_public(key.rsa_public_der(&AlgorithmId::RS256).unwrap().to_vec());

        let signing = SigningKey::new(AlgorithmId::RS256, key).unwrap();
        let verifying = SigningKey::new(AlgorithmId::RS256, public).unwrap();

        let handler = JwtHandler::shared();
        let compact = handler
            .encode(&ClaimSet::new(), &sample_claims(), &signing)
            .unwrap();
        let token = handler.decode(&compact).unwrap();

        assert!(handler.verify(&token, &verifying).unwrap());
        assert!(matches!(
            handler.encode(&ClaimSet::new(), &sample_claims(), &verifying),
            Err(Error::KeyTypeMismatch { .. })
        ));
    }
}

// ============================================================================
// ECDSA Algorithm Round-Trips (ES256, ES384)
// ============================================================================

#[cfg(feature = "ecdsa")]
mod ecdsa_tests {
    use super::*;
    use ring::rand::SystemRandom;
    use ring::signature::{
        EcdsaKeyPair, ECDSA_P256_SHA256_FIXED_SIGNING, ECDSA_P384_SHA384_FIXED_SIGNING,
    };

    fn generate_ecdsa_key(curve: EcdsaCurve) -> Key {
        let rng = SystemRandom::new();
        let alg = match curve {
            EcdsaCurve::P256 => &ECDSA_P256_SHA256_FIXED_SIGNING,
            EcdsaCurve::P384 => &ECDSA_P384_SHA384_FIXED_SIGNING,
        };
        let pkcs8 = EcdsaKeyPair::generate_pkcs8(alg, &rng).expect("Failed to generate key");
        Key::ecdsa_pkcs8(pkcs8.as_ref(), curve).expect("Failed to load key")
    }

    #[test]
    fn round_trip_es256() {
        assert_round_trip(
            &SigningKey::new(AlgorithmId::ES256, generate_ecdsa_key(EcdsaCurve::P256)).unwrap(),
            &SigningKey::new(AlgorithmId::ES256, generate_ecdsa_key(EcdsaCurve::P256)).unwrap(),
        );
    }

    #[test]
    fn round_trip_es384() {
        assert_round_trip(
            &SigningKey::new(AlgorithmId::ES384, generate_ecdsa_key(EcdsaCurve::P384)).unwrap(),
            &SigningKey::new(AlgorithmId::ES384, generate_ecdsa_key(EcdsaCurve::P384)).unwrap(),
        );
    }

    #[test]
    fn wrong_curve_is_key_mismatch() {
        assert!(matches!(
            SigningKey::new(AlgorithmId::ES256, generate_ecdsa_key(EcdsaCurve::P384)),
            Err(Error::KeyTypeMismatch { .. })
        ));
    }
}
