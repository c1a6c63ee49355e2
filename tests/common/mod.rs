//! Common test helpers for histogram tests

#![allow(dead_code)]

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal, Uniform};

pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}

/// Reference counts computed with the plain binning contract:
/// `bin = floor((x - xmin) / bin_width)`, counted only when `0 <= bin < nbins`.
pub fn reference_counts(samples: &[f32], xmin: f64, xmax: f64, nbins: usize) -> Vec<i64> {
    let bin_width = (xmax - xmin) / nbins as f64;
    let mut counts = vec![0i64; nbins];
    for &x in samples {
        let bin = ((x as f64 - xmin) / bin_width).floor();
        if bin >= 0.0 && bin < nbins as f64 {
            counts[bin as usize] += 1;
        }
    }
    counts
}

pub fn uniform_samples(n: usize, lo: f32, hi: f32, seed: u64) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Uniform::new(lo, hi).unwrap();
    (0..n).map(|_| dist.sample(&mut rng)).collect()
}

pub fn normal_samples(n: usize, mean: f64, std_dev: f64, seed: u64) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(mean, std_dev).unwrap();
    (0..n).map(|_| normal.sample(&mut rng) as f32).collect()
}
