//! Operation traits and their per-backend implementations
//!
//! The `traits` module defines the operation surface; `cpu` and `wgpu`
//! implement it for their respective runtime clients.

#[cfg(feature = "cpu")]
mod cpu;
pub mod traits;
#[cfg(feature = "wgpu")]
mod wgpu;

pub use traits::HistogramOps;
