//! CPU runtime implementation
//!
//! The default backend. Histogram filling distributes samples across worker
//! lanes with a grid-stride loop; lanes share a single array of atomic
//! counters.

mod client;
mod device;
pub(crate) mod histogram;
mod runtime;

pub use client::CpuClient;
pub use device::CpuDevice;
pub use runtime::CpuRuntime;
