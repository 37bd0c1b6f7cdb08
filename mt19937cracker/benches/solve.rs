use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use mt19937cracker::{Cracker, Granularity, Mt19937};

fn observe(state: [u32; 624], granularity: Granularity, n: usize) -> Vec<bool> {
    let k = granularity.observed_bits_per_extract();
    let mut engine = Mt19937::from_state(state);
    let mut observations = Vec::with_capacity(n);
    'outputs: loop {
        let y = engine.extract();
        for b in 0..k {
            if observations.len() >= n {
                break 'outputs;
            }
            observations.push((y >> (31 - b)) & 1 != 0);
        }
    }
    observations
}

fn sample_state() -> [u32; 624] {
    let mut state = [0u32; 624];
    for (i, w) in state.iter_mut().enumerate() {
        *w = (i as u32).wrapping_mul(2_654_435_761).wrapping_add(1);
    }
    state
}

fn criterion_benchmark(c: &mut Criterion) {
    let state = sample_state();
    let mut group = c.benchmark_group("Cracker::solve");

    for granularity in [
        Granularity::ThirtyTwo,
        Granularity::Sixteen,
        Granularity::Eight,
        Granularity::Four,
        Granularity::Two,
    ] {
        let observations = observe(state, granularity, mt19937cracker::OBSERVATION_LEN);
        group.bench_with_input(
            BenchmarkId::new("k", granularity.bits()),
            &observations,
            |b, observations| {
                b.iter(|| {
                    let mut cracker = Cracker::new();
                    cracker.solve(observations, granularity).unwrap();
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
