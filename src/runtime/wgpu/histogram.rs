//! Histogram operations for the WebGPU runtime

use super::client::WgpuClient;
use super::shaders::{HistogramParams, launch_histogram};
use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use crate::runtime::histogram_common::{
    compute_bin_edges_f64, derive_range, validate_bins, validate_range,
};

/// Accumulate bin counts for `samples` into `counts` in place, on the GPU.
///
/// Samples are uploaded to a storage buffer and binned by the WGSL kernel;
/// the per-launch `u32` counters are read back and added to `counts`.
///
/// # Implementation Notes
///
/// - WebGPU has no `f64`: samples are narrowed to `f32` on the host before
///   upload, and the bin arithmetic runs in `f32`. Samples within one `f32`
///   ULP of a bin edge may land one bin away from the CPU backend's `f64`
///   result.
/// - Per-launch counters are `u32`; a single call saturates at `u32::MAX`
///   hits per bin. Accumulation across calls is `i64` on the host.
///
/// # Errors
///
/// - `InvalidArgument` if `counts` is empty or `xmin >= xmax`
/// - `BackendLimitation` if the sample buffer exceeds device limits
/// - `Backend` if readback fails
pub fn histogram_into_impl<T: Element>(
    client: &WgpuClient,
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

    let nbins = counts.len();
    if samples.len() > u32::MAX as usize || nbins > u32::MAX as usize {
        return Err(Error::backend_limitation(
            "wgpu",
            "histogram",
            "sample and bin counts must fit in u32",
        ));
    }

    // WebGPU has no f64: f32 samples upload as-is, f64 samples are narrowed.
    let data: Vec<f32> = match T::DTYPE {
        DType::F32 => bytemuck::cast_slice(samples).to_vec(),
        DType::F64 => samples.iter().map(|&v| v.to_f64() as f32).collect(),
    };

    let sample_bytes = std::mem::size_of_val(data.as_slice()) as u64;
    let max_binding = client.device_id.max_storage_buffer_size();
    if sample_bytes > max_binding {
        return Err(Error::backend_limitation(
            "wgpu",
            "histogram",
            format!(
                "sample buffer of {} bytes exceeds the device's {} byte storage binding limit",
                sample_bytes, max_binding
            ),
        ));
    }

    let count_bytes = (nbins * std::mem::size_of::<u32>()) as u64;

    let samples_buf = client.create_storage_buffer("histogram_samples", sample_bytes);
    let counts_buf = client.create_storage_buffer("histogram_counts", count_bytes);
    let params_buf = client.create_uniform_buffer(
        "histogram_params",
        std::mem::size_of::<HistogramParams>() as u64,
    );

    let bin_width = (xmax - xmin) / nbins as f64;
    let params = HistogramParams {
        numel: data.len() as u32,
        nbins: nbins as u32,
        xmin: xmin as f32,
        bin_width: bin_width as f32,
    };

    let zeros = vec![0u32; nbins];
    client.write_buffer(&samples_buf, &data);
    client.write_buffer(&counts_buf, &zeros);
    client.write_buffer(&params_buf, &[params]);

    launch_histogram(
        client.pipeline_cache(),
        client.wgpu_queue(),
        &samples_buf,
        &counts_buf,
        &params_buf,
        data.len(),
    )?;

    // Read back and widen into the caller's counters.
    let staging = client.create_staging_buffer("histogram_staging", count_bytes);
    let mut encoder = client
        .wgpu_device()
        .create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("histogram_readback"),
        });
    encoder.copy_buffer_to_buffer(&counts_buf, 0, &staging, 0, count_bytes);
    client.submit_and_wait(encoder);

    let mut gpu_counts = vec![0u32; nbins];
    client.read_buffer(&staging, &mut gpu_counts)?;

    for (count, gpu) in counts.iter_mut().zip(gpu_counts) {
        *count += gpu as i64;
    }

    Ok(())
}

/// Compute a fresh histogram of `samples` on the GPU.
///
/// # Arguments
///
/// * `client` - The WebGPU runtime client
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
    client: &WgpuClient,
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
