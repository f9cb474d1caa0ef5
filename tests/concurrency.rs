//! Shared-handler concurrency tests
//!
//! One handler serves every thread. Results produced concurrently must equal
//! the results of doing the same work sequentially, index for index.

use jwtcodec::*;
use rand::Rng;
use std::thread;

const THREADS: usize = 8;

fn claims_for(index: usize) -> ClaimSet {
    ClaimSet::new()
        .with("sub", index.to_string())
        .with("iss", "me")
        .with("aud", "you")
        .with("idx", index)
}

fn random_count() -> usize {
    rand::thread_rng().gen_range(1000..10000)
}

/// Run `work` for every index in `0..n`, split over `THREADS` scoped threads
fn run_parallel<T, F>(n: usize, work: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize) -> T + Sync,
{
    let chunk = n.div_ceil(THREADS);
    let work = &work;

    thread::scope(|scope| {
        let handles: Vec<_> = (0..n)
            .step_by(chunk)
            .map(|start| {
                scope.spawn(move || (start..(start + chunk).min(n)).map(work).collect::<Vec<_>>())
            })
            .collect();

        handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect()
    })
}

#[test]
fn concurrent_encode_matches_sequential() {
    let n = random_count();
    let key = SigningKey::hs256("secret");
    let header = ClaimSet::new();

    let expected: Vec<String> = (0..n)
        .map(|i| {
            JwtHandler::new()
                .encode(&header, &claims_for(i), &key)
                .unwrap()
        })
        .collect();

    let shared = JwtHandler::shared();
    let actual = run_parallel(n, |i| shared.encode(&header, &claims_for(i), &key).unwrap());

    assert_eq!(actual.len(), n);
    assert_eq!(actual, expected);
}

#[test]
fn concurrent_decode_and_verify() {
    let n = random_count();
    let key = SigningKey::hs384("another-secret");
    let handler = JwtHandler::new();

    let tokens: Vec<String> = (0..n)
        .map(|i| handler.encode(&ClaimSet::new(), &claims_for(i), &key).unwrap())
        .collect();

    let results = run_parallel(n, |i| {
        let token = tokens[i].to_jwt_token().unwrap();
        let verified = JwtHandler::shared().verify(&token, &key).unwrap();
        (token.compile_to_string(), token.claims().get_i64("idx"), verified)
    });

    for (i, (compiled, idx, verified)) in results.into_iter().enumerate() {
        assert_eq!(compiled, tokens[i]);
        assert_eq!(idx, Some(i as i64));
        assert!(verified);
    }
}

#[test]
fn cloned_handlers_agree() {
    let handler = JwtHandler::with_config(HandlerConfig::new().with_token_type("at+jwt"));
    let key = SigningKey::hs512("secret");
    let expected = handler
        .encode(&ClaimSet::new(), &claims_for(7), &key)
        .unwrap();

    let results: Vec<String> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let handler = handler.clone();
                let key = key.clone();
                scope.spawn(move || handler.encode(&ClaimSet::new(), &claims_for(7), &key).unwrap())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(results.iter().all(|token| token == &expected));
}
