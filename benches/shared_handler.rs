//! Shared handler benchmarks
//!
//! Compares one process-wide handler against a handler built per call, for
//! encoding and for decode + verify, across the HMAC algorithms.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use jwtcodec::*;

fn sample_claims() -> ClaimSet {
    ClaimSet::new()
        .with("sub", "11228")
        .with("iss", "me")
        .with("aud", "you")
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    let header = ClaimSet::new();
    let claims = sample_claims();

    for key in [
        SigningKey::hs256("test-secret-key-for-hs256"),
        SigningKey::hs384("test-secret-key-for-hs384-needs-to-be-longer"),
        SigningKey::hs512("test-secret-key-for-hs512-needs-to-be-even-longer-for-512-bits"),
    ] {
        let alg = key.algorithm().as_str();

        group.bench_function(format!("{alg}/shared"), |b| {
            let handler = JwtHandler::shared();
            b.iter(|| handler.encode(black_box(&header), black_box(&claims), &key).unwrap());
        });

        group.bench_function(format!("{alg}/per_call"), |b| {
            b.iter(|| {
                JwtHandler::new()
                    .encode(black_box(&header), black_box(&claims), &key)
                    .unwrap()
            });
        });
    }

    group.finish();
}

fn bench_decode_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_verify");
    let key = SigningKey::hs256("test-secret-key-for-hs256");
    let token = JwtHandler::shared()
        .encode(&ClaimSet::new(), &sample_claims(), &key)
        .unwrap();

    group.bench_function("HS256/shared", |b| {
        let handler = JwtHandler::shared();
        b.iter(|| {
            let decoded = handler.decode(black_box(&token)).unwrap();
            handler.verify(&decoded, &key).unwrap()
        });
    });

    group.bench_function("HS256/per_call", |b| {
        b.iter(|| {
            let decoded = JwtHandler::new().decode(black_box(&token)).unwrap();
            JwtHandler::new().verify(&decoded, &key).unwrap()
        });
    });

    group.bench_function("HS256/extension", |b| {
        b.iter(|| black_box(&token).to_jwt_token().unwrap().compile_to_string());
    });

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode_verify);
criterion_main!(benches);
