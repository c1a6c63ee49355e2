//! # histr
//!
//! **Parallel histogram binning for Rust with multi-backend GPU acceleration.**
//!
//! histr computes bin counts for arrays of floating-point samples over a fixed
//! half-open range `[xmin, xmax)` partitioned into equal-width bins - with the
//! same API on the CPU and on the GPU.
//!
//! ## Why histr?
//!
//! - **Multi-backend**: Same code runs on CPU (rayon + atomic counters) and on
//!   any GPU WebGPU can reach (Vulkan, Metal, DX12)
//! - **Race-free by construction**: Concurrent lanes share one counter array;
//!   increments use hardware fetch-and-add, so no update is ever lost
//! - **Accumulating**: Counters are incremented in place, never reset - feed
//!   batches of samples into the same histogram across many calls
//! - **Pure Rust**: No FFI, no vendor toolkit, single binary deployment
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use histr::prelude::*;
//!
//! let device = CpuDevice::new();
//! let client = CpuRuntime::default_client(&device)?;
//!
//! // Fresh histogram: counts plus bin edges.
//! let samples = [0.5f32, 1.5, 2.5, -1.0, 10.0];
//! let (counts, edges) = client.histogram(&samples, 3, Some((0.0, 3.0)))?;
//! assert_eq!(counts, vec![1, 1, 1]); // -1.0 and 10.0 fall outside [0, 3)
//!
//! // Accumulate into a caller-owned counter array.
//! let mut counts = vec![0i64; 3];
//! client.histogram_into(&samples, (0.0, 3.0), &mut counts)?;
//! client.histogram_into(&samples, (0.0, 3.0), &mut counts)?;
//! assert_eq!(counts, vec![2, 2, 2]);
//! ```
//!
//! ## Binning contract
//!
//! For each sample `x`, the target bin is `floor((x - xmin) / bin_width)` with
//! `bin_width = (xmax - xmin) / nbins`. A sample is counted only when its bin
//! index lies in `[0, nbins)`; everything else - values below `xmin`, values at
//! or above `xmax`, NaN - is dropped silently. A sample equal to `xmin` lands
//! in bin 0; a sample equal to `xmax` lands in no bin.
//!
//! ## Feature Flags
//!
//! - `cpu` (default): CPU backend
//! - `rayon` (default): Multi-threaded CPU kernels
//! - `wgpu`: Cross-platform GPU backend via WebGPU

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dtype;
pub mod error;
pub mod ops;
pub mod runtime;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dtype::{DType, Element};
    pub use crate::error::{Error, Result};
    pub use crate::ops::HistogramOps;
    pub use crate::runtime::{Device, Runtime, RuntimeClient};

    #[cfg(feature = "cpu")]
    pub use crate::runtime::cpu::{CpuDevice, CpuRuntime};

    #[cfg(feature = "wgpu")]
    pub use crate::runtime::wgpu::{WgpuDevice, WgpuRuntime};
}

/// Default runtime based on enabled features
///
/// - With `wgpu` feature: `WgpuRuntime`
/// - Otherwise: `CpuRuntime`
#[cfg(feature = "wgpu")]
pub type DefaultRuntime = runtime::wgpu::WgpuRuntime;

/// Default runtime based on enabled features
#[cfg(all(feature = "cpu", not(feature = "wgpu")))]
pub type DefaultRuntime = runtime::cpu::CpuRuntime;
