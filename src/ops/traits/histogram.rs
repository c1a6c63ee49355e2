//! Histogram operations trait.

use crate::dtype::Element;
use crate::error::Result;

/// Histogram binning operations, implemented by every runtime client
pub trait HistogramOps {
    /// Accumulate bin counts for `samples` into a caller-owned counter array
    ///
    /// The range `[xmin, xmax)` is half-open and partitioned into
    /// `counts.len()` equal-width bins. Each in-range sample increments
    /// exactly one counter; out-of-range samples - values below `xmin`,
    /// values at or above `xmax`, NaN - are dropped silently. Pre-existing
    /// counter values are preserved and added to, so repeated calls
    /// accumulate across batches.
    ///
    /// # Arguments
    ///
    /// * `samples` - Input samples (`f32` or `f64`)
    /// * `range` - `(xmin, xmax)` bounds of the half-open range
    /// * `counts` - Counter array; its length is the bin count
    ///
    /// # Algorithm
    ///
    /// ```text
    /// bin_width = (xmax - xmin) / counts.len()
    /// for each sample x:
    ///     bin = floor((x - xmin) / bin_width)
    ///     if 0 <= bin < counts.len():
    ///         counts[bin] += 1   (atomic fetch-and-add across lanes)
    /// ```
    ///
    /// Samples are partitioned across parallel lanes with a grid-stride
    /// loop; the counter array is the only shared mutable state and every
    /// increment goes through an atomic add, so no update is lost. The
    /// order increments land in is unspecified.
    ///
    /// # Examples
    ///
    /// ```
    /// # use histr::prelude::*;
    /// let device = CpuDevice::new();
    /// let client = CpuRuntime::default_client(&device)?;
    ///
    /// let samples = [0.5f32, 1.5, 2.5, -1.0, 10.0];
    /// let mut counts = vec![0i64; 3];
    /// client.histogram_into(&samples, (0.0, 3.0), &mut counts)?;
    /// assert_eq!(counts, vec![1, 1, 1]); // -1.0 and 10.0 dropped
    ///
    /// client.histogram_into(&samples, (0.0, 3.0), &mut counts)?;
    /// assert_eq!(counts, vec![2, 2, 2]); // accumulates, never resets
    /// # Ok::<(), histr::error::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `counts` is empty
    /// - `InvalidArgument` if `xmin >= xmax`
    fn histogram_into<T: Element>(
        &self,
        samples: &[T],
        range: (f64, f64),
        counts: &mut [i64],
    ) -> Result<()>;

    /// Compute a fresh histogram of `samples`
    ///
    /// Allocates a zeroed counter array, bins the samples with the same
    /// contract as [`histogram_into`](Self::histogram_into), and returns the
    /// counts together with the `bins + 1` bin edges.
    ///
    /// # Arguments
    ///
    /// * `samples` - Input samples
    /// * `bins` - Number of equal-width bins
    /// * `range` - Optional `(min, max)` range. `None` derives the range
    ///   from the data: the finite minimum and maximum, with the upper
    ///   bound nudged one ULP up so the maximum sample is counted, and a
    ///   degenerate all-equal range widened to `(v - 0.5, v + 0.5)`. An
    ///   empty input with `None` falls back to `(0.0, 1.0)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use histr::prelude::*;
    /// let device = CpuDevice::new();
    /// let client = CpuRuntime::default_client(&device)?;
    ///
    /// let samples = [0.5f32, 1.5, 2.5, 1.0, 2.0];
    /// let (counts, edges) = client.histogram(&samples, 3, Some((0.0, 3.0)))?;
    /// assert_eq!(counts, vec![1, 2, 2]);
    /// assert_eq!(edges.len(), 4);
    /// # Ok::<(), histr::error::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `bins` is 0
    /// - `InvalidArgument` if range min >= max
    /// - `InvalidArgument` if `range` is `None` and no sample is finite
    fn histogram<T: Element>(
        &self,
        samples: &[T],
        bins: usize,
        range: Option<(f64, f64)>,
    ) -> Result<(Vec<i64>, Vec<f64>)>;
}
