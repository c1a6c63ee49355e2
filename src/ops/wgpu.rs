//! WebGPU implementations of the operation traits

use crate::dtype::Element;
use crate::error::Result;
use crate::ops::traits::HistogramOps;
use crate::runtime::wgpu::{WgpuClient, histogram};

impl HistogramOps for WgpuClient {
    fn histogram_into<T: Element>(
        &self,
        samples: &[T],
        range: (f64, f64),
        counts: &mut [i64],
    ) -> Result<()> {
        histogram::histogram_into_impl(self, samples, range, counts)
    }

    fn histogram<T: Element>(
        &self,
        samples: &[T],
        bins: usize,
        range: Option<(f64, f64)>,
    ) -> Result<(Vec<i64>, Vec<f64>)> {
        histogram::histogram_impl(self, samples, bins, range)
    }
}
