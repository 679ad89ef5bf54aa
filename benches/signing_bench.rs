// Signing and verification benchmarks across both supported algorithms.
//
// The interesting number here is the Ed25519-to-Falcon ratio: Falcon-512
// keygen and signing are orders of magnitude heavier, and callers picking an
// algorithm should know what they're buying.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use helix_keys::KeyPair;

const ALGORITHMS: [&str; 2] = ["ed25519", "falcon512"];

fn bench_keypair_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("keypair_generate");
    for algo in ALGORITHMS {
        group.bench_function(algo, |b| {
            b.iter(|| KeyPair::from_random(algo).unwrap());
        });
    }
    group.finish();
}

fn bench_sign_message(c: &mut Criterion) {
    let mut group = c.benchmark_group("sign_message");
    let message = b"transfer 500 HLX from alice to bob; nonce=42";
    for algo in ALGORITHMS {
        let kp = KeyPair::from_random(algo).unwrap();
        group.bench_function(algo, |b| {
            b.iter(|| kp.sign(message));
        });
    }
    group.finish();
}

fn bench_verify_signature(c: &mut Criterion) {
    let mut group = c.benchmark_group("verify_signature");
    let message = b"transfer 500 HLX from alice to bob; nonce=42";
    for algo in ALGORITHMS {
        let kp = KeyPair::from_random(algo).unwrap();
        let sig = kp.sign(message);
        let pk = kp.public_key();
        group.bench_function(algo, |b| {
            b.iter(|| pk.verify(message, sig.as_bytes()).unwrap());
        });
    }
    group.finish();
}

fn bench_parse_key_pair(c: &mut Criterion) {
    // Falcon pays a sign/verify probe on every parse; this keeps that cost
    // visible instead of buried in a keystore's startup time.
    let mut group = c.benchmark_group("parse_key_pair");
    for algo in ALGORITHMS {
        let encoded = KeyPair::from_random(algo).unwrap().to_string();
        group.throughput(Throughput::Bytes(encoded.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(algo), &encoded, |b, encoded| {
            b.iter(|| encoded.parse::<KeyPair>().unwrap());
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_keypair_generation,
    bench_sign_message,
    bench_verify_signature,
    bench_parse_key_pair,
);
criterion_main!(benches);
