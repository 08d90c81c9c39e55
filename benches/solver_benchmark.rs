use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::Duration;

use superstring::{instance, solve, Algorithm, Fragment, OverlapGraph};

/// Window instance over a seeded random DNA text; the same seed keeps runs
/// comparable across code changes.
fn window_instance(source_len: usize, window: usize) -> Vec<String> {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let mut rng = StdRng::seed_from_u64(42);
    let text = instance::random_text("AGCT", source_len, &mut rng);
    instance::window_sample(&text, window, 0.25, &mut rng)
}

/// Windows over a text of distinct symbols chain back into exactly one path,
/// so the compressor always takes its fast path.
fn chain_instance(source_len: usize, window: usize) -> Vec<String> {
    let text: String = (0..source_len).map(|i| (b'!' + (i % 90) as u8) as char).collect();
    let mut windows = Vec::with_capacity(source_len - window + 1);
    for start in 0..=source_len - window {
        windows.push(text[start..start + window].to_string());
    }
    windows
}

fn bench_overlap_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlap_graph");
    group.measurement_time(Duration::from_secs(8));
    group.sample_size(20);

    for n in [64, 128, 256].iter() {
        let strings = window_instance(*n, 16);
        let fragments = Fragment::from_strings(&strings);

        group.bench_with_input(
            BenchmarkId::new("build", fragments.len()),
            &fragments,
            |b, fragments| {
                b.iter(|| OverlapGraph::build(black_box(fragments)));
            },
        );
    }

    group.finish();
}

fn bench_greedy(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy_merge");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(10);

    for n in [64, 128, 256].iter() {
        let strings = window_instance(*n, 16);

        group.bench_with_input(
            BenchmarkId::new("plain", strings.len()),
            &strings,
            |b, strings| {
                b.iter(|| solve(black_box(strings), Algorithm::Greedy));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("tie_break", strings.len()),
            &strings,
            |b, strings| {
                b.iter(|| solve(black_box(strings), Algorithm::TieBreakGreedy));
            },
        );
    }

    group.finish();
}

fn bench_hierarchical(c: &mut Criterion) {
    let mut group = c.benchmark_group("hierarchical_merge");
    group.measurement_time(Duration::from_secs(8));
    group.sample_size(20);

    for n in [64, 128, 256].iter() {
        let strings = window_instance(*n, 16);

        group.bench_with_input(
            BenchmarkId::new("cycle_cover", strings.len()),
            &strings,
            |b, strings| {
                b.iter(|| solve(black_box(strings), Algorithm::Hierarchical));
            },
        );
    }

    group.finish();
}

fn bench_chain_compression(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain_compress");
    group.measurement_time(Duration::from_secs(8));
    group.sample_size(20);

    for n in [30, 60, 90].iter() {
        let strings = chain_instance(*n, 8);

        group.bench_with_input(
            BenchmarkId::new("fast_path", strings.len()),
            &strings,
            |b, strings| {
                b.iter(|| solve(black_box(strings), Algorithm::Chain));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_overlap_graph,
    bench_greedy,
    bench_hierarchical,
    bench_chain_compression,
);

criterion_main!(benches);
