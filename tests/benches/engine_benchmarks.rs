//! # Engine Benchmarks
//!
//! Performance checkpoints for the hot paths:
//!
//! | Operation | Expectation |
//! |-----------|-------------|
//! | Signer recovery | < 1ms per signature |
//! | Action digest | microseconds, linear in payload |
//! | 3-of-5 execution | dominated by the k recoveries |

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::Rng;
use std::time::Duration;

use msw_account::{AccountEngine, AccountParams, CallContext, CallFailure, CallTarget};
use msw_signature::{recover_signer, transaction_hash, EcdsaSignature};
use msw_tests::harness::{authorize, keypairs, Keypair};
use shared_types::{Address, Bytes, U256};

/// No-op destination; keeps the measurement on the engine itself.
struct Sink;

impl CallTarget for Sink {
    fn call(
        &mut self,
        _account: &mut AccountEngine,
        _ctx: CallContext,
    ) -> Result<Bytes, CallFailure> {
        Ok(Bytes::new())
    }
}

// ============================================================================
// Signer recovery
// ============================================================================

fn bench_signer_recovery(c: &mut Criterion) {
    let mut group = c.benchmark_group("signature-recovery");
    group.measurement_time(Duration::from_secs(5));

    let pair = Keypair::from_seed(1);
    let digest = transaction_hash(
        Address::new([0xAA; 20]),
        31337,
        0,
        Address::new([0xBB; 20]),
        U256::from(1_000u64),
        b"benchmark payload",
    );
    let wire = pair.sign_digest(&digest);
    let sig = EcdsaSignature::from_bytes(wire.as_slice()).expect("wire encoding");

    group.bench_function("recover_signer", |b| {
        b.iter(|| black_box(recover_signer(&digest, &sig)))
    });

    group.finish();
}

// ============================================================================
// Action digest
// ============================================================================

fn bench_action_digest(c: &mut Criterion) {
    let mut group = c.benchmark_group("action-digest");
    group.measurement_time(Duration::from_secs(5));

    let account = Address::new([0xAA; 20]);
    let destination = Address::new([0xBB; 20]);
    let value = U256::from(42u64);

    group.bench_function("empty_payload", |b| {
        b.iter(|| black_box(transaction_hash(account, 31337, 7, destination, value, &[])))
    });

    let mut rng = rand::thread_rng();
    let payload: Vec<u8> = (0..1024).map(|_| rng.gen()).collect();

    group.bench_function("payload_1kb", |b| {
        b.iter(|| {
            black_box(transaction_hash(
                account,
                31337,
                7,
                destination,
                value,
                &payload,
            ))
        })
    });

    group.finish();
}

// ============================================================================
// End-to-end execution
// ============================================================================

fn bench_quorum_execution(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine-execute");
    group.measurement_time(Duration::from_secs(10));

    let owners = keypairs(5);
    let payee = Address::new([0xBB; 20]);

    // Each iteration consumes a sequence value, so signing happens in the
    // setup half of the batch and a fresh engine is spent per run.
    group.bench_function("three_of_five_transfer", |b| {
        b.iter_batched(
            || {
                let engine = AccountEngine::new(AccountParams {
                    address: Address::new([0xAA; 20]),
                    domain_id: 31337,
                    owners: owners.iter().map(Keypair::identity).collect(),
                    quorum: 3,
                    funding: U256::from(1_000_000u64),
                })
                .expect("valid account parameters");

                let payload = Bytes::new();
                let sigs = authorize(
                    &engine,
                    &[&owners[0], &owners[2], &owners[4]],
                    payee,
                    U256::from(10),
                    &payload,
                );
                (engine, sigs)
            },
            |(mut engine, sigs)| {
                let mut sink = Sink;
                black_box(engine.execute(
                    owners[0].identity(),
                    payee,
                    U256::from(10),
                    Bytes::new(),
                    &sigs,
                    &mut sink,
                ))
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_signer_recovery,
    bench_action_digest,
    bench_quorum_execution,
);

criterion_main!(benches);
