//! Tests for in-place accumulation and the grid-stride parallel kernel

mod common;

use histr::prelude::*;
use histr::runtime::cpu::CpuClient;

use common::{normal_samples, reference_counts};

fn cpu_client() -> CpuClient {
    CpuRuntime::default_client(&CpuDevice::new()).unwrap()
}

// ============================================================================
// Accumulation Semantics
// ============================================================================

#[test]
fn test_accumulate_twice_doubles_counts() {
    let client = cpu_client();
    let samples = normal_samples(20_000, 0.0, 1.0, 7);

    let mut once = vec![0i64; 32];
    client
        .histogram_into(&samples, (-3.0, 3.0), &mut once)
        .unwrap();

    let mut twice = vec![0i64; 32];
    client
        .histogram_into(&samples, (-3.0, 3.0), &mut twice)
        .unwrap();
    client
        .histogram_into(&samples, (-3.0, 3.0), &mut twice)
        .unwrap();

    let doubled: Vec<i64> = once.iter().map(|c| c * 2).collect();
    assert_eq!(twice, doubled);
}

#[test]
fn test_accumulate_preserves_existing_counts() {
    let client = cpu_client();

    let samples = [0.5f32, 1.5];
    let mut counts = vec![100i64, 200, 300];
    client
        .histogram_into(&samples, (0.0, 3.0), &mut counts)
        .unwrap();
    assert_eq!(counts, vec![101, 201, 300]);
}

#[test]
fn test_empty_samples_leave_counts_unchanged() {
    let client = cpu_client();

    let samples: [f32; 0] = [];
    let mut counts = vec![4i64, 5, 6];
    client
        .histogram_into(&samples, (0.0, 3.0), &mut counts)
        .unwrap();
    assert_eq!(counts, vec![4, 5, 6]);
}

#[test]
fn test_empty_counts_rejected() {
    let client = cpu_client();

    let samples = [0.5f32];
    let mut counts: Vec<i64> = vec![];
    assert!(
        client
            .histogram_into(&samples, (0.0, 3.0), &mut counts)
            .is_err()
    );
}

#[test]
fn test_invalid_range_rejected() {
    let client = cpu_client();

    let samples = [0.5f32];
    let mut counts = vec![0i64; 4];
    assert!(
        client
            .histogram_into(&samples, (3.0, 3.0), &mut counts)
            .is_err()
    );
    assert!(
        client
            .histogram_into(&samples, (5.0, 3.0), &mut counts)
            .is_err()
    );
}

#[test]
fn test_non_finite_samples_dropped() {
    let client = cpu_client();

    let samples = [f32::NAN, f32::INFINITY, f32::NEG_INFINITY, 0.5];
    let mut counts = vec![0i64; 3];
    client
        .histogram_into(&samples, (0.0, 3.0), &mut counts)
        .unwrap();
    assert_eq!(counts, vec![1, 0, 0]);
}

#[test]
fn test_accumulate_f64_samples() {
    let client = cpu_client();

    let samples = [0.5f64, 1.5, 2.5, 3.0];
    let mut counts = vec![0i64; 3];
    client
        .histogram_into(&samples, (0.0, 3.0), &mut counts)
        .unwrap();
    assert_eq!(counts, vec![1, 1, 1]);
}

// ============================================================================
// Parallel Partitioning
// ============================================================================

#[test]
fn test_parallel_matches_sequential_reference() {
    // The total across bins must be invariant under any partitioning of the
    // sample array across lanes: every lane count must reproduce the
    // sequential reference bin-for-bin.
    let samples = normal_samples(50_000, 0.0, 1.5, 1234);
    let reference = reference_counts(&samples, -4.0, 4.0, 64);

    for lanes in [1, 2, 3, 8, 33, 256] {
        let client = CpuClient::with_lanes(CpuDevice::new(), lanes);
        let mut counts = vec![0i64; 64];
        client
            .histogram_into(&samples, (-4.0, 4.0), &mut counts)
            .unwrap();
        assert_eq!(counts, reference, "lanes = {}", lanes);
    }
}

#[test]
fn test_lane_count_clamped_to_one() {
    let client = CpuClient::with_lanes(CpuDevice::new(), 0);
    assert_eq!(client.lanes(), 1);

    let default_client = cpu_client();
    assert!(default_client.lanes() >= 1);
}
