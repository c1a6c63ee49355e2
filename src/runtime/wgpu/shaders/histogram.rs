//! Histogram WGSL kernel and launcher
//!
//! The kernel is a one-dimensional grid-stride loop: invocation `k` of a
//! launch with `stride` total invocations processes sample indices `k`,
//! `k + stride`, `k + 2*stride`, ... Every index is visited by exactly one
//! invocation, and arrays larger than the grid are covered by the loop.
//!
//! The counter array is shared by all invocations; increments go through
//! `atomicAdd`, so concurrent hits on the same bin are never lost. WGSL
//! atomics are 32-bit: a single launch counts in `u32` per bin and the
//! result is widened to `i64` on readback.

use bytemuck::{Pod, Zeroable};
use wgpu::{Buffer, Queue};

use super::pipeline::{LayoutKey, PipelineCache, WORKGROUP_SIZE, workgroup_count};
use crate::error::Result;

/// Uniform parameters for the histogram kernel.
///
/// Field order matches the WGSL `HistogramParams` struct; total size is
/// 16 bytes, satisfying uniform buffer alignment.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct HistogramParams {
    /// Number of samples
    pub numel: u32,
    /// Number of bins
    pub nbins: u32,
    /// Lower bound of the half-open range
    pub xmin: f32,
    /// Bin width
    pub bin_width: f32,
}

/// Generate the WGSL histogram shader.
fn generate_histogram_shader() -> String {
    format!(
        r#"
// Histogram kernel: half-open range [xmin, xmax), equal-width bins.
//
// bin = floor((x - xmin) / bin_width); counted only when 0 <= bin < nbins.
// Out-of-range samples (including x == xmax and NaN) are dropped.

struct HistogramParams {{
    numel: u32,
    nbins: u32,
    xmin: f32,
    bin_width: f32,
}}

@group(0) @binding(0) var<storage, read> samples: array<f32>;
@group(0) @binding(1) var<storage, read_write> counts: array<atomic<u32>>;
@group(0) @binding(2) var<uniform> params: HistogramParams;

@compute @workgroup_size({wg})
fn histogram_f32(
    @builtin(global_invocation_id) gid: vec3<u32>,
    @builtin(num_workgroups) groups: vec3<u32>,
) {{
    let stride = groups.x * {wg}u;

    var i = gid.x;
    while (i < params.numel) {{
        let pos = (samples[i] - params.xmin) / params.bin_width;
        let bin = i32(floor(pos));
        if (bin >= 0 && u32(bin) < params.nbins) {{
            atomicAdd(&counts[u32(bin)], 1u);
        }}
        i = i + stride;
    }}
}}
"#,
        wg = WORKGROUP_SIZE
    )
}

/// Launch the histogram kernel.
///
/// `samples` binds read-only, `counts` read-write (`nbins` zeroed `u32`
/// counters), `params` as the uniform block. The dispatch is submitted to
/// `queue`; the caller is responsible for waiting and reading back.
pub fn launch_histogram(
    cache: &PipelineCache,
    queue: &Queue,
    samples: &Buffer,
    counts: &Buffer,
    params: &Buffer,
    numel: usize,
) -> Result<()> {
    let shader = generate_histogram_shader();
    let module = cache.get_or_create_module("histogram", &shader);

    let layout = cache.get_or_create_layout(LayoutKey {
        num_readonly_storage: 1,
        num_storage_buffers: 1,
        num_uniform_buffers: 1,
    });

    let pipeline = cache.get_or_create_pipeline("histogram", "histogram_f32", &module, &layout);

    let bind_group = cache.create_bind_group(&layout, &[samples, counts, params]);

    let mut encoder = cache
        .device()
        .create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("histogram"),
        });

    {
        let mut pass = encoder.begin_compute_pass(&wgpu::ComputePassDescriptor {
            label: Some("histogram"),
            timestamp_writes: None,
        });
        pass.set_pipeline(&pipeline);
        pass.set_bind_group(0, Some(&bind_group), &[]);
        pass.dispatch_workgroups(workgroup_count(numel), 1, 1);
    }

    queue.submit(std::iter::once(encoder.finish()));
    Ok(())
}
