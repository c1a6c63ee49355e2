//! WebGPU runtime implementation (requires `wgpu` feature)
//!
//! Cross-platform GPU backend. The histogram kernel is a WGSL compute shader:
//! a one-dimensional grid of invocations runs the same grid-stride loop as
//! the CPU backend and increments a shared `array<atomic<u32>>` of bin
//! counters with `atomicAdd`.

mod cache;
mod client;
mod device;
pub(crate) mod histogram;
mod runtime;
pub mod shaders;

pub use client::WgpuClient;
pub use device::{WgpuDevice, WgpuError};
pub use runtime::WgpuRuntime;
