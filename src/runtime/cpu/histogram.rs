//! Histogram kernels for the CPU runtime

#[cfg(feature = "rayon")]
use std::sync::atomic::{AtomicI64, Ordering};

use super::client::CpuClient;
use crate::dtype::Element;
use crate::error::{Error, Result};
#[cfg(feature = "rayon")]
use crate::runtime::histogram_common::bin_index;
use crate::runtime::histogram_common::{
    accumulate_counts, compute_bin_edges_f64, derive_range, validate_bins, validate_range,
};

/// Inputs shorter than this are counted on the calling thread; forking lanes
/// costs more than the scan.
#[cfg(feature = "rayon")]
const MIN_PARALLEL_LEN: usize = 4096;

/// Accumulate bin counts for `samples` into `counts` in place.
///
/// The range `[xmin, xmax)` is half-open and partitioned into `counts.len()`
/// equal-width bins. Out-of-range samples are dropped silently. Pre-existing
/// counter values are preserved.
///
/// # Errors
///
/// - `InvalidArgument` if `counts` is empty
/// - `InvalidArgument` if `xmin >= xmax`
pub fn histogram_into_impl<T: Element>(
    client: &CpuClient,
    samples: &[T],
    range: (f64, f64),
    counts: &mut [i64],
) -> Result<()> {
    let (xmin, xmax) = range;
    if counts.is_empty() {
        return Err(Error::InvalidArgument {
            arg: "counts",
            reason: "Counter array must not be empty".to_string(),
        });
    }
    validate_range(xmin, xmax)?;

    if samples.is_empty() {
        return Ok(());
    }

    #[cfg(feature = "rayon")]
    if client.lanes() > 1 && samples.len() >= MIN_PARALLEL_LEN {
        let bin_width = (xmax - xmin) / counts.len() as f64;
        let bins: Vec<AtomicI64> = (0..counts.len()).map(|_| AtomicI64::new(0)).collect();

        fill_grid_stride(samples, xmin, bin_width, &bins, client.lanes());

        for (count, bin) in counts.iter_mut().zip(&bins) {
            *count += bin.load(Ordering::Relaxed);
        }
        return Ok(());
    }

    #[cfg(not(feature = "rayon"))]
    let _ = client;
    accumulate_counts(samples, xmin, xmax, counts);
    Ok(())
}

/// Compute a fresh histogram of `samples`.
///
/// # Arguments
///
/// * `client` - The CPU runtime client
/// * `samples` - Input samples
/// * `bins` - Number of histogram bins (must be > 0)
/// * `range` - Optional (min, max) range; defaults to the data min/max
///
/// # Returns
///
/// Tuple of (bin counts, bin edges). Edges have `bins + 1` entries.
///
/// # Errors
///
/// - `InvalidArgument` if `bins` is 0
/// - `InvalidArgument` if range min >= max
pub fn histogram_impl<T: Element>(
    client: &CpuClient,
    samples: &[T],
    bins: usize,
    range: Option<(f64, f64)>,
) -> Result<(Vec<i64>, Vec<f64>)> {
    validate_bins(bins)?;

    if samples.is_empty() {
        let (xmin, xmax) = match range {
            Some((min_val, max_val)) => {
                validate_range(min_val, max_val)?;
                (min_val, max_val)
            }
            None => (0.0, 1.0),
        };
        return Ok((vec![0; bins], compute_bin_edges_f64(xmin, xmax, bins)));
    }

    let (xmin, xmax) = match range {
        Some((min_val, max_val)) => {
            validate_range(min_val, max_val)?;
            (min_val, max_val)
        }
        None => derive_range(samples)?,
    };

    let mut counts = vec![0i64; bins];
    histogram_into_impl(client, samples, (xmin, xmax), &mut counts)?;

    Ok((counts, compute_bin_edges_f64(xmin, xmax, bins)))
}

/// Grid-stride fill: lane `k` processes sample indices `k, k + lanes,
/// k + 2*lanes, ...`, so every index is visited by exactly one lane and the
/// sample array may be arbitrarily longer than the lane count. Lanes share
/// `bins`; contention on a counter is resolved by fetch-and-add, so no
/// increment is lost. Increment order between lanes is unspecified.
#[cfg(feature = "rayon")]
fn fill_grid_stride<T: Element>(
    samples: &[T],
    xmin: f64,
    bin_width: f64,
    bins: &[AtomicI64],
    lanes: usize,
) {
    use rayon::prelude::*;

    let n = samples.len();
    (0..lanes).into_par_iter().for_each(|lane| {
        let mut i = lane;
        while i < n {
            if let Some(bin) = bin_index(samples[i].to_f64(), xmin, bin_width, bins.len()) {
                bins[bin].fetch_add(1, Ordering::Relaxed);
            }
            i += lanes;
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::cpu::CpuDevice;

    #[test]
    fn test_grid_stride_matches_reference() {
        let samples: Vec<f32> = (0..10_000).map(|i| (i % 97) as f32 / 10.0).collect();

        let mut reference = vec![0i64; 16];
        accumulate_counts(&samples, 0.0, 10.0, &mut reference);

        for lanes in [1, 2, 3, 7, 32] {
            let client = CpuClient::with_lanes(CpuDevice::new(), lanes);
            let mut counts = vec![0i64; 16];
            histogram_into_impl(&client, &samples, (0.0, 10.0), &mut counts).unwrap();
            assert_eq!(counts, reference, "lanes = {}", lanes);
        }
    }

    #[test]
    fn test_more_lanes_than_samples() {
        let samples: Vec<f32> = vec![0.5; 3];
        let client = CpuClient::with_lanes(CpuDevice::new(), 64);
        let mut counts = vec![0i64; 2];
        histogram_into_impl(&client, &samples, (0.0, 2.0), &mut counts).unwrap();
        assert_eq!(counts, vec![3, 0]);
    }
}
