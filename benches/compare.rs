//! Comparator benchmarks: word-reorder vs byte-at-a-time
//!
//! Measures the shipped word-based comparator against a byte-at-a-time
//! field-order comparator and a raw-bytes lexicographic baseline, on pairs
//! whose timestamps differ (decided early) and on pairs that tie into the
//! identity bytes (worst case).
//!
//! ## Running
//!
//! ```bash
//! # All comparator benchmarks
//! cargo bench --bench compare
//!
//! # Specific variants
//! cargo bench --bench compare -- "compare/word"
//! cargo bench --bench compare -- "tied"
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::cmp::Ordering;
use timeuuid::TimeUuid;

// =============================================================================
// Constants and Configuration
// =============================================================================

/// Fixed seed for deterministic benchmark inputs.
const BENCH_SEED: u64 = 0xCAFE_F00D_0515_1DEA;

/// Number of key pairs compared per iteration.
const PAIR_COUNT: usize = 1024;

// =============================================================================
// Comparator Variants
// =============================================================================

/// Byte-at-a-time field-order comparison, the shape the word-based
/// comparator replaced: byte 6 masked to its low nibble, byte 7, bytes
/// 4..6, bytes 0..4, then the identity bytes.
fn compare_bytewise(a: &TimeUuid, b: &TimeUuid) -> Ordering {
    const TIME_FIELD_ORDER: [(usize, u8); 8] = [
        (6, 0x0F),
        (7, 0xFF),
        (4, 0xFF),
        (5, 0xFF),
        (0, 0xFF),
        (1, 0xFF),
        (2, 0xFF),
        (3, 0xFF),
    ];
    let (a, b) = (a.as_bytes(), b.as_bytes());
    for (pos, mask) in TIME_FIELD_ORDER {
        match (a[pos] & mask).cmp(&(b[pos] & mask)) {
            Ordering::Equal => {}
            decided => return decided,
        }
    }
    a[8..].cmp(&b[8..])
}

/// Raw lexicographic byte comparison. NOT a correct timeuuid order (it
/// sorts by time_low first); included only as a lower-bound baseline.
fn compare_raw_bytes(a: &TimeUuid, b: &TimeUuid) -> Ordering {
    a.as_bytes().cmp(b.as_bytes())
}

// =============================================================================
// Input Generation
// =============================================================================

fn random_key(rng: &mut StdRng) -> [u8; 16] {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    bytes
}

/// Fully random pairs; almost all comparisons are decided by the timestamp.
fn random_pairs(rng: &mut StdRng) -> Vec<(TimeUuid, TimeUuid)> {
    (0..PAIR_COUNT)
        .map(|_| {
            (
                TimeUuid::from_bytes(random_key(rng)),
                TimeUuid::from_bytes(random_key(rng)),
            )
        })
        .collect()
}

/// Pairs sharing their timestamp half, forcing the identity tie-break.
fn tied_pairs(rng: &mut StdRng) -> Vec<(TimeUuid, TimeUuid)> {
    (0..PAIR_COUNT)
        .map(|_| {
            let a = random_key(rng);
            let mut b = random_key(rng);
            b[..8].copy_from_slice(&a[..8]);
            (TimeUuid::from_bytes(a), TimeUuid::from_bytes(b))
        })
        .collect()
}

fn signum(ordering: Ordering) -> i32 {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_compare(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(BENCH_SEED);
    let workloads = [
        ("random", random_pairs(&mut rng)),
        ("tied", tied_pairs(&mut rng)),
    ];

    let mut group = c.benchmark_group("compare");
    group.throughput(Throughput::Elements(PAIR_COUNT as u64));

    for (workload, pairs) in &workloads {
        group.bench_function(BenchmarkId::new("word", workload), |b| {
            b.iter(|| {
                let mut acc = 0i32;
                for (x, y) in pairs {
                    acc += signum(x.cmp(y));
                }
                black_box(acc)
            })
        });

        group.bench_function(BenchmarkId::new("bytewise", workload), |b| {
            b.iter(|| {
                let mut acc = 0i32;
                for (x, y) in pairs {
                    acc += signum(compare_bytewise(x, y));
                }
                black_box(acc)
            })
        });

        group.bench_function(BenchmarkId::new("raw_bytes", workload), |b| {
            b.iter(|| {
                let mut acc = 0i32;
                for (x, y) in pairs {
                    acc += signum(compare_raw_bytes(x, y));
                }
                black_box(acc)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compare);
criterion_main!(benches);
