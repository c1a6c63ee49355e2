//! Runtime backends for histogram computation
//!
//! This module defines the `Runtime` trait and provides implementations
//! for different compute backends (CPU, WebGPU).
//!
//! # Architecture
//!
//! ```text
//! Runtime (backend identity)
//! ├── Device (identifies a specific GPU/CPU)
//! └── Client (dispatches operations, owns stream/queue and tuning knobs)
//! ```

pub mod histogram_common;

#[cfg(feature = "cpu")]
pub mod cpu;

#[cfg(feature = "wgpu")]
pub mod wgpu;

use crate::error::Result;

/// Core trait for compute backends
///
/// `Runtime` abstracts over different compute devices (CPU, GPU, etc.).
/// It uses static dispatch via generics for zero-cost abstraction.
///
/// # Associated Types
///
/// - `Device`: Identifies a specific compute unit (e.g., GPU 0, GPU 1)
/// - `Client`: Handles operation dispatch and synchronization
///
/// # Example
///
/// ```ignore
/// use histr::prelude::*;
///
/// fn fill<R: Runtime>(device: &R::Device) -> Result<()>
/// where
///     R::Client: HistogramOps,
/// {
///     let client = R::default_client(device)?;
///     let mut counts = vec![0i64; 8];
///     client.histogram_into(&[0.5f32, 1.5], (0.0, 8.0), &mut counts)
/// }
/// ```
pub trait Runtime: Clone + Send + Sync + 'static {
    /// Device identifier type
    type Device: Device;

    /// Client for dispatching operations
    type Client: RuntimeClient<Self>;

    /// Human-readable name of this runtime
    fn name() -> &'static str;

    /// Get the default device
    fn default_device() -> Self::Device;

    /// Get the default client for a device
    ///
    /// GPU backends initialize (or reuse) the underlying device here, which
    /// can fail when no suitable adapter exists.
    fn default_client(device: &Self::Device) -> Result<Self::Client>;
}

/// Trait for device identification
pub trait Device: Clone + Send + Sync + 'static {
    /// Unique identifier for this device
    fn id(&self) -> usize;

    /// Check if two devices are the same
    fn is_same(&self, other: &Self) -> bool {
        self.id() == other.id()
    }

    /// Human-readable name
    fn name(&self) -> String {
        format!("Device({})", self.id())
    }
}

/// Trait for runtime clients that handle operation dispatch
pub trait RuntimeClient<R: Runtime>: Clone + Send + Sync {
    /// Get the device this client operates on
    fn device(&self) -> &R::Device;

    /// Synchronize: wait for all pending operations to complete
    fn synchronize(&self);
}
