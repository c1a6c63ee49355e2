#![allow(dead_code)]

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use histr::prelude::*;
use histr::runtime::cpu::CpuClient;

fn pseudo_uniform(n: usize, lo: f32, hi: f32) -> Vec<f32> {
    (0..n)
        .map(|i| lo + (i.wrapping_mul(2_654_435_761) % 1_000_000) as f32 / 1_000_000.0 * (hi - lo))
        .collect()
}

// ---------------------------------------------------------------------------
// histogram_into: throughput over input size
// ---------------------------------------------------------------------------

fn bench_fill_sizes(c: &mut Criterion) {
    let client = CpuRuntime::default_client(&CpuDevice::new()).unwrap();

    let mut group = c.benchmark_group("histogram_into_f32");
    for &n in &[1_000usize, 100_000, 1_000_000, 10_000_000] {
        let samples = pseudo_uniform(n, -1.0, 2.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &samples, |b, samples| {
            let mut counts = vec![0i64; 256];
            b.iter(|| {
                client
                    .histogram_into(black_box(samples), (0.0, 1.0), &mut counts)
                    .unwrap()
            });
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// histogram_into: lane sweep at fixed size
// ---------------------------------------------------------------------------

fn bench_fill_lanes(c: &mut Criterion) {
    let samples = pseudo_uniform(4_000_000, -1.0, 2.0);

    let mut group = c.benchmark_group("histogram_into_lanes");
    for &lanes in &[1usize, 2, 4, 8, 16] {
        let client = CpuClient::with_lanes(CpuDevice::new(), lanes);
        group.bench_with_input(
            BenchmarkId::from_parameter(lanes),
            &samples,
            |b, samples| {
                let mut counts = vec![0i64; 256];
                b.iter(|| {
                    client
                        .histogram_into(black_box(samples), (0.0, 1.0), &mut counts)
                        .unwrap()
                });
            },
        );
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// Fresh histogram with derived range
// ---------------------------------------------------------------------------

fn bench_auto_range(c: &mut Criterion) {
    let client = CpuRuntime::default_client(&CpuDevice::new()).unwrap();
    let samples = pseudo_uniform(1_000_000, -1.0, 2.0);

    c.bench_function("histogram_auto_range_1m", |b| {
        b.iter(|| black_box(client.histogram(black_box(&samples), 256, None).unwrap()));
    });
}

// ---------------------------------------------------------------------------
// WebGPU backend (feature-gated; skipped when no adapter is present)
// ---------------------------------------------------------------------------

#[cfg(feature = "wgpu")]
fn bench_wgpu(c: &mut Criterion) {
    use histr::runtime::wgpu::WgpuClient;

    let Ok(client) = WgpuClient::new(WgpuDevice::new(0)) else {
        eprintln!("No GPU available, skipping wgpu benches");
        return;
    };

    let mut group = c.benchmark_group("histogram_into_wgpu_f32");
    for &n in &[1_000_000usize, 10_000_000] {
        let samples = pseudo_uniform(n, -1.0, 2.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &samples, |b, samples| {
            let mut counts = vec![0i64; 256];
            b.iter(|| {
                client
                    .histogram_into(black_box(samples), (0.0, 1.0), &mut counts)
                    .unwrap()
            });
        });
    }
    group.finish();
}

#[cfg(not(feature = "wgpu"))]
fn bench_wgpu(_c: &mut Criterion) {}

criterion_group!(
    benches,
    bench_fill_sizes,
    bench_fill_lanes,
    bench_auto_range,
    bench_wgpu
);
criterion_main!(benches);
