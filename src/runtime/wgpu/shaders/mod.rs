//! WGSL compute shader infrastructure for WebGPU operations
//!
//! This module provides the native WGSL histogram kernel and the pipeline
//! caching it runs through. The kernel runs entirely on the GPU with no CPU
//! fallback.
//!
//! # Module Structure
//!
//! - `pipeline` - Pipeline caching and dispatch utilities
//! - `histogram` - Histogram kernel source and launcher

pub mod histogram;
mod pipeline;

pub use histogram::{HistogramParams, launch_histogram};
pub use pipeline::{LayoutKey, MAX_WORKGROUPS, PipelineCache, WORKGROUP_SIZE, workgroup_count};
