//! Criterion view of the same comparison the sweep makes.
//!
//! Run with: cargo bench --bench membership

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lookup_scaling::{create_lookup_values, create_test_values, seeded_rng, Container, Strategy};

const SIZES: [i64; 4] = [100, 1_000, 10_000, 100_000];
const NUM_LOOKUPS: i64 = 20;

fn bench_membership(c: &mut Criterion) {
    let mut group = c.benchmark_group("membership");
    let mut rng = seeded_rng(Some(54321));

    for size in SIZES {
        let pool = create_test_values(&mut rng, size).unwrap();
        let probes = create_lookup_values(&mut rng, size, NUM_LOOKUPS).unwrap();
        group.throughput(Throughput::Elements(NUM_LOOKUPS as u64));

        for strategy in Strategy::ALL {
            let container = Container::build(strategy, &pool);
            group.bench_with_input(
                BenchmarkId::new(strategy.label(), size),
                &probes,
                |b, probes| b.iter(|| container.run_trial(probes)),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_membership);
criterion_main!(benches);
